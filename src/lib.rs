//! # word-rnn
//!
//! Corpus preparation and model assembly for a word-level recurrent
//! language model.
//!
//! ## Overview
//!
//! The crate takes a raw text corpus, normalises it into a vocabulary of
//! lemmas, builds fixed-length sliding-window training examples with
//! one-hot next-word targets, maps the vocabulary onto a pretrained
//! word2vec table (drawing random vectors for out-of-vocabulary words),
//! and wires an embedding + stacked-LSTM + dense network as a Burn
//! module. Training itself is left to an external driver.
//!
//! ## Structure
//!
//! - [`domain`] — the `Morphology` and `WordVectors` trait seams
//! - [`data`]   — preprocessing, vocabulary, example generation, batching
//! - [`ml`]     — the Burn model architecture
//! - [`infra`]  — filesystem-backed trait implementations

pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;

pub use data::batcher::{TrainingBatch, TrainingBatcher};
pub use data::preprocessor::Preprocessor;
pub use data::provider::{CoverageReport, DataProvider, TrainingData};
pub use data::vocabulary::Vocabulary;
pub use domain::traits::{Morphology, WordVectors};
pub use infra::morphology::{DictionaryMorphology, IdentityMorphology};
pub use infra::word2vec_store::{PretrainedVectors, Word2vecStore};
pub use ml::model::{WordRnn, WordRnnConfig};
