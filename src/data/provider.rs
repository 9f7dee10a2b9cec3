// ============================================================
// Layer 2 — Data Provider
// ============================================================
// Converts a Vocabulary into supervised training examples and
// assembles the pretrained embedding matrix.
//
// How example generation works:
//   A window of max_len consecutive lemmas is the input; the
//   single lemma right after the window is the target, encoded
//   one-hot over the vocabulary. The window then advances by a
//   fixed stride of 3 words.
//
// Example with max_len=3 (stride 3):
//   Corpus:   "cat sat on the mat the cat ran"
//   Window 1: [cat sat on]  → target "the"
//   Window 2: [the mat the] → target "cat"
//
// Words the pretrained table does not know get a freshly drawn
// uniform [0,1) vector of the embedding dimensionality. The scan
// walks the full corpus and re-draws on every occurrence; the
// map is keyed by word, so the last draw for a word wins.
//
// Reference: Mikolov et al. (2013) word2vec paper

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::vocabulary::Vocabulary;
use crate::domain::traits::WordVectors;

/// Fixed window stride for example generation.
const STEP: usize = 3;

/// How many unknown words to include in the logged sample.
const UNKNOWN_SAMPLE_LIMIT: usize = 50;

/// Row-aligned training examples.
///
/// `features[i]` is a window of `max_len` vocabulary indices and
/// `targets[i]` is the one-hot row for the word that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    pub features: Vec<Vec<usize>>,
    pub targets: Vec<Vec<f32>>,
}

impl TrainingData {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Embedding coverage diagnostics. Informational only — nothing
/// downstream branches on these numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Up to 50 unknown words, in index order.
    pub unknown_sample: Vec<String>,
    /// Distinct words absent from the pretrained table.
    pub unknown_count: usize,
    /// Total distinct words in the vocabulary.
    pub vocab_size: usize,
}

/// Builds training tensors and the embedding matrix for one corpus.
pub struct DataProvider<W: WordVectors> {
    vocab: Vocabulary,
    word2vec: W,
    embedding_dim: usize,
}

impl<W: WordVectors> DataProvider<W> {
    /// Both collaborators are passed in explicitly so tests can
    /// substitute fakes.
    pub fn new(vocab: Vocabulary, word2vec: W) -> Self {
        let embedding_dim = word2vec.dims();
        Self { vocab, word2vec, embedding_dim }
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Slide a window of `max_len` lemmas across the corpus at
    /// stride 3 and emit (index window, one-hot next word) rows.
    ///
    /// A corpus with `max_len` words or fewer yields no examples;
    /// the caller is expected to detect the empty result.
    pub fn training_data(&self) -> TrainingData {
        let max_len = self.vocab.max_len();
        let list_words = self.vocab.list_words();
        let vocab_size = self.vocab.size();

        let mut features = Vec::new();
        let mut targets = Vec::new();

        // Last valid window start leaves max_len words plus the
        // target word after it. saturating_sub keeps short corpora
        // at zero iterations instead of underflowing.
        let end = list_words.len().saturating_sub(max_len);

        for start in (0..end).step_by(STEP) {
            let window: Vec<usize> = list_words[start..start + max_len]
                .iter()
                .map(|w| {
                    self.vocab
                        .word_index(w)
                        .expect("corpus word is always in the vocabulary")
                })
                .collect();

            let next_word = &list_words[start + max_len];
            let next_index = self
                .vocab
                .word_index(next_word)
                .expect("corpus word is always in the vocabulary");

            let mut one_hot = vec![0.0; vocab_size];
            one_hot[next_index] = 1.0;

            features.push(window);
            targets.push(one_hot);
        }

        TrainingData { features, targets }
    }

    /// Assign a random fallback vector to every corpus word the
    /// pretrained table does not cover.
    ///
    /// The scan walks `list_words` and draws a fresh vector per
    /// occurrence; the returned map keeps the last draw per word.
    pub fn collect_unknown_words(&self) -> HashMap<String, Vec<f32>> {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        let mut unknown_words: HashMap<String, Vec<f32>> = HashMap::new();
        for word in self.vocab.list_words() {
            if !self.word2vec.contains(word) {
                let vector: Vec<f32> =
                    (0..self.embedding_dim).map(|_| rng.gen::<f32>()).collect();
                unknown_words.insert(word.clone(), vector);
            }
        }
        unknown_words
    }

    /// Build the full embedding matrix: one row per vocabulary
    /// index, pretrained where available, random fallback where
    /// not. Logs coverage diagnostics as a side effect.
    pub fn embedding_matrix(&self) -> Vec<Vec<f32>> {
        let unknown_words = self.collect_unknown_words();

        let sample: Vec<&String> =
            unknown_words.keys().take(UNKNOWN_SAMPLE_LIMIT).collect();
        tracing::info!("unknown word sample: {:?}", sample);
        tracing::info!("unknown words: {}", unknown_words.len());
        tracing::info!("total words: {}", self.vocab.size());

        let mut matrix = vec![vec![0.0; self.embedding_dim]; self.vocab.size()];
        for (word, i) in self.vocab.iter() {
            match self.word2vec.vector(word) {
                Some(vector) => matrix[i] = vector,
                None => {
                    matrix[i] = unknown_words
                        .get(word)
                        .expect("unknown word was assigned a fallback vector")
                        .clone()
                }
            }
        }
        matrix
    }

    /// The same diagnostics embedding_matrix() logs, as a value
    /// the caller can export.
    pub fn coverage_report(&self) -> CoverageReport {
        let unknown: Vec<String> = self
            .vocab
            .iter()
            .filter(|(w, _)| !self.word2vec.contains(w))
            .map(|(w, _)| w.to_string())
            .collect();

        CoverageReport {
            unknown_count: unknown.len(),
            unknown_sample: unknown.into_iter().take(UNKNOWN_SAMPLE_LIMIT).collect(),
            vocab_size: self.vocab.size(),
        }
    }
}
