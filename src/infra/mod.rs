// ============================================================
// Layer 4 — Infrastructure Layer
// ============================================================
// Concrete implementations of the domain traits, backed by the
// filesystem:
//
//   word2vec_store.rs — Pretrained vector loading
//                       Reads a word2vec file (text or binary
//                       exchange format) via finalfusion and
//                       exposes it through the WordVectors trait.
//
//   morphology.rs     — Lemma lookup implementations
//                       A pass-through normaliser and a
//                       dictionary-backed one loadable from a
//                       two-column TSV file.
//
// Why is this a separate layer?
//   These are the swappable edges of the system. Keeping them
//   here leaves the data layer free of file I/O, so it can be
//   tested entirely in memory.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pretrained word2vec loading via finalfusion
pub mod word2vec_store;

/// Morphological normalisation implementations
pub mod morphology;
