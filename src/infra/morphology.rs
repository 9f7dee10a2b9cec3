// ============================================================
// Layer 4 — Morphology Implementations
// ============================================================
// Two implementations of the Morphology trait:
//
//   IdentityMorphology   — returns every word unchanged. The
//                          right choice for corpora that are
//                          already in canonical form, or for
//                          weakly inflected languages.
//
//   DictionaryMorphology — surface form → lemma lookup table.
//                          Loadable from a two-column TSV file
//                          (surface<TAB>lemma per line), the
//                          common export format of morphological
//                          dictionaries.
//
// Unknown words always fall through unchanged — a missing
// dictionary entry is not an error, it just means the surface
// form already is the lemma (or we have no better guess).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::traits::Morphology;

// ─── IdentityMorphology ───────────────────────────────────────────────────────
/// Pass-through normaliser: every word is its own normal form.
pub struct IdentityMorphology;

impl Morphology for IdentityMorphology {
    fn normal_form(&self, word: &str) -> String {
        word.to_string()
    }
}

// ─── DictionaryMorphology ─────────────────────────────────────────────────────
/// Lemma lookup backed by an in-memory dictionary.
pub struct DictionaryMorphology {
    lemmas: HashMap<String, String>,
}

impl DictionaryMorphology {
    /// Build from (surface, lemma) pairs. Handy for tests and
    /// small hand-maintained dictionaries.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let lemmas = pairs
            .iter()
            .map(|(surface, lemma)| (surface.to_string(), lemma.to_string()))
            .collect();
        Self { lemmas }
    }

    /// Load a dictionary from a TSV file: one `surface<TAB>lemma`
    /// entry per line. Blank lines and lines without a tab are
    /// skipped.
    pub fn from_tsv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read lemma dictionary '{}'", path.display()))?;

        let lemmas = content
            .lines()
            .filter_map(|line| {
                let (surface, lemma) = line.split_once('\t')?;
                let (surface, lemma) = (surface.trim(), lemma.trim());
                if surface.is_empty() || lemma.is_empty() {
                    return None;
                }
                Some((surface.to_string(), lemma.to_string()))
            })
            .collect();

        Ok(Self { lemmas })
    }

    /// Number of dictionary entries.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Morphology for DictionaryMorphology {
    fn normal_form(&self, word: &str) -> String {
        self.lemmas
            .get(word)
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_through() {
        assert_eq!(IdentityMorphology.normal_form("running"), "running");
    }

    #[test]
    fn test_dictionary_lookup() {
        let m = DictionaryMorphology::from_pairs(&[("ran", "run"), ("cats", "cat")]);
        assert_eq!(m.normal_form("ran"), "run");
        assert_eq!(m.normal_form("cats"), "cat");
    }

    #[test]
    fn test_unknown_word_unchanged() {
        let m = DictionaryMorphology::from_pairs(&[("ran", "run")]);
        assert_eq!(m.normal_form("dog"), "dog");
    }

    #[test]
    fn test_from_tsv() {
        let path = std::env::temp_dir().join("word_rnn_lemmas_test.tsv");
        std::fs::write(&path, "ran\trun\ncats\tcat\n\nmalformed line\n").unwrap();

        let m = DictionaryMorphology::from_tsv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(m.len(), 2);
        assert_eq!(m.normal_form("ran"), "run");
        // Lines without a tab are skipped, not errors.
        assert_eq!(m.normal_form("malformed"), "malformed");
    }

    #[test]
    fn test_from_tsv_missing_file_is_fatal() {
        let err = DictionaryMorphology::from_tsv("/nonexistent/lemmas.tsv");
        assert!(err.is_err());
    }
}
