// ============================================================
// Layer 2 — Data Pipeline
// ============================================================
// Everything from a raw corpus string to tensor-ready
// training examples.
//
// The pipeline flows in this order:
//
//   raw text
//       │
//       ▼
//   Preprocessor      → lowercases, strips punctuation
//       │
//       ▼
//   Vocabulary        → lemmatises words, builds word↔index maps
//       │
//       ▼
//   DataProvider      → sliding windows + one-hot targets,
//                       embedding matrix with coverage stats
//       │
//       ▼
//   TrainingBatcher   → stacks rows into Burn tensors
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Cleans and normalises raw corpus text
pub mod preprocessor;

/// Word↔index maps over the normalised corpus
pub mod vocabulary;

/// Sliding-window examples and the pretrained embedding matrix
pub mod provider;

/// Stacks training rows into tensor batches
pub mod batcher;
