// ============================================================
// Layer 1 — Domain Layer
// ============================================================
// Pure abstractions with no framework types and no I/O.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust traits
//
// The two seams defined here are things earlier drafts held as
// process-wide singletons: a morphological analyzer instantiated
// at startup and a word2vec model loaded from a fixed path.
// Making them explicit constructor dependencies means every
// consumer can be exercised with an in-memory fake.
//
// Reference: Rust Book §10 (Traits)

// Core abstractions (traits) that other layers implement
pub mod traits;
