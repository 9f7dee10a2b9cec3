// ============================================================
// Layer 2 — Vocabulary
// ============================================================
// Turns a raw corpus string into:
//   - list_words: the full corpus as an ordered list of lemmas
//   - words:      the distinct lemmas, sorted
//   - word↔index maps over the distinct lemmas
//
// Why lemmatise?
//   Word-level models over inflected languages explode in
//   vocabulary size if every surface form gets its own index.
//   Collapsing forms onto their lemma keeps the softmax layer
//   small enough to train.
//
// Index assignment is deterministic: distinct words are sorted
// lexicographically before numbering, so the same corpus always
// yields the same indices. Downstream consumers only need
// self-consistency within one run, but reproducible indices make
// checkpoints comparable across runs for free.
//
// Reference: Rust Book §8 (HashMaps)

use std::collections::HashMap;

use crate::data::preprocessor::Preprocessor;
use crate::domain::traits::Morphology;

/// Word↔index vocabulary over a normalised corpus.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Window length downstream example builders will use.
    max_len: usize,
    /// Every corpus token in order, normalised to its lemma.
    list_words: Vec<String>,
    /// Distinct lemmas in sorted order; position == index.
    words: Vec<String>,
    /// Reverse mapping from lemma to index.
    word_indices: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from raw text.
    ///
    /// # Panics
    /// Panics if `max_len` is zero — a zero-length window can
    /// never produce a training example.
    pub fn new(text: &str, max_len: usize, morph: &dyn Morphology) -> Self {
        assert!(max_len >= 1, "max_len ({}) must be at least 1", max_len);

        let cleaned = Preprocessor::new().clean(text);

        // Normalise every token to its lemma, preserving corpus order.
        let list_words: Vec<String> = cleaned
            .split_whitespace()
            .map(|w| morph.normal_form(w))
            .collect();

        // Distinct lemmas, sorted so index assignment is reproducible.
        let mut words: Vec<String> = list_words.clone();
        words.sort();
        words.dedup();

        let word_indices: HashMap<String, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        Self { max_len, list_words, words, word_indices }
    }

    /// Window length this vocabulary was built for.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The normalised corpus in order.
    pub fn list_words(&self) -> &[String] {
        &self.list_words
    }

    /// Number of distinct words.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Index for a word, or None if it is not in the vocabulary.
    pub fn word_index(&self, word: &str) -> Option<usize> {
        self.word_indices.get(word).copied()
    }

    /// Word for an index, or None if out of range.
    pub fn index_word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate over (word, index) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words.iter().enumerate().map(|(i, w)| (w.as_str(), i))
    }
}
