// ============================================================
// Layer 4 — Word2vec Store
// ============================================================
// Loads a pretrained word-vector file and exposes it through
// the WordVectors trait.
//
// Two exchange formats are supported, both via finalfusion:
//   - word2vec text format   (header line "count dim", then one
//                             "word v1 v2 ..." line per entry)
//   - word2vec binary format (the original C tool's output)
//
// load() picks the format from the file extension: ".bin" means
// binary, anything else is treated as text. The explicit
// load_text()/load_binary() methods are there for files with
// unhelpful names.
//
// A missing or corrupt file is fatal — there is no partial-load
// recovery, because a half-loaded table would silently degrade
// every downstream embedding row.
//
// Reference: Mikolov et al. (2013) word2vec paper

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use finalfusion::compat::text::ReadTextDims;
use finalfusion::compat::word2vec::ReadWord2Vec;
use finalfusion::embeddings::Embeddings;
use finalfusion::storage::NdArray;
use finalfusion::vocab::{SimpleVocab, Vocab};

use crate::domain::traits::WordVectors;

/// Loads pretrained vectors from a word2vec file on disk.
pub struct Word2vecStore {
    path: PathBuf,
}

impl Word2vecStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the vectors, choosing the format by file extension.
    pub fn load(&self) -> Result<PretrainedVectors> {
        let is_binary = self
            .path
            .extension()
            .map(|ext| ext == "bin")
            .unwrap_or(false);

        if is_binary {
            self.load_binary()
        } else {
            self.load_text()
        }
    }

    /// Load a word2vec text-format file (dims header line).
    pub fn load_text(&self) -> Result<PretrainedVectors> {
        let mut reader = self.open()?;
        let inner = Embeddings::read_text_dims(&mut reader).with_context(|| {
            format!("cannot parse '{}' as word2vec text format", self.path.display())
        })?;
        Ok(self.wrap(inner))
    }

    /// Load a word2vec binary-format file.
    pub fn load_binary(&self) -> Result<PretrainedVectors> {
        let mut reader = self.open()?;
        let inner = Embeddings::read_word2vec_binary(&mut reader).with_context(|| {
            format!("cannot parse '{}' as word2vec binary format", self.path.display())
        })?;
        Ok(self.wrap(inner))
    }

    fn open(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.path).with_context(|| {
            format!("cannot open pretrained vectors '{}'", self.path.display())
        })?;
        Ok(BufReader::new(file))
    }

    fn wrap(&self, inner: Embeddings<SimpleVocab, NdArray>) -> PretrainedVectors {
        tracing::info!(
            "loaded {} pretrained vectors (dim {}) from {}",
            inner.vocab().words_len(),
            inner.dims(),
            self.path.display()
        );
        PretrainedVectors { inner }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A loaded pretrained table. Read-only after construction.
pub struct PretrainedVectors {
    inner: Embeddings<SimpleVocab, NdArray>,
}

impl WordVectors for PretrainedVectors {
    fn dims(&self) -> usize {
        self.inner.dims()
    }

    fn vector(&self, word: &str) -> Option<Vec<f32>> {
        self.inner.embedding(word).map(|v| v.to_vec())
    }
}
