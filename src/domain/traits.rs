// ============================================================
// Layer 1 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - Word2vecStore produces a finalfusion-backed WordVectors
//   - Tests implement WordVectors with a plain HashMap
//   - Vocabulary and DataProvider only ever see the trait
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

// ─── Morphology ───────────────────────────────────────────────────────────────
/// Maps a surface word form to its canonical dictionary form (lemma).
///
/// For inflected languages this collapses variants like
/// "ran" / "runs" / "running" onto one vocabulary entry.
///
/// Implementations:
///   - IdentityMorphology     → pass-through (corpus already canonical)
///   - DictionaryMorphology   → surface → lemma lookup table
pub trait Morphology {
    /// Return the normal form of `word`.
    /// Words the analyzer does not know are returned unchanged.
    fn normal_form(&self, word: &str) -> String;
}

// ─── WordVectors ──────────────────────────────────────────────────────────────
/// Read-only access to a pretrained word embedding table.
///
/// Implementations:
///   - PretrainedVectors → backed by a word2vec file via finalfusion
///   - test fakes        → backed by a HashMap
pub trait WordVectors {
    /// Dimensionality of every vector in the table.
    fn dims(&self) -> usize;

    /// Look up the vector for `word`, or None if the word is
    /// out of vocabulary for the pretrained table.
    fn vector(&self, word: &str) -> Option<Vec<f32>>;

    /// Whether the table has an entry for `word`.
    fn contains(&self, word: &str) -> bool {
        self.vector(word).is_some()
    }
}
