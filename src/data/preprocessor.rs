// ============================================================
// Layer 2 — Text Preprocessor
// ============================================================
// Cleans a raw corpus string before word splitting.
//
// Why do we need to clean text?
//   Scraped prose contains punctuation, digits glued to words,
//   stray control characters and inconsistent casing. If we
//   don't clean these, the vocabulary fills up with near
//   duplicates ("Cat", "cat," and "cat" as three entries).
//
// The cleaning rule is fixed and deterministic:
//   1. Lowercase every character
//   2. Keep letters and digits; everything else becomes a space
//   3. Collapse runs of spaces into one
//   4. Trim leading/trailing whitespace
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Apply the fixed cleaning rule to `text`.
    /// Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Normalise individual characters ───────────────────────────
        // char-level iteration keeps this safe for any Unicode input.
        let mapped: String = text
            .chars()
            .flat_map(|c| {
                if c.is_alphanumeric() {
                    c.to_lowercase().collect::<Vec<char>>()
                } else {
                    vec![' ']
                }
            })
            .collect();

        // ── Step 2: Collapse runs of spaces ───────────────────────────────────
        let mut out = String::with_capacity(mapped.len());
        let mut last_space = false;
        for c in mapped.chars() {
            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        out.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("The CAT"), "the cat");
    }

    #[test]
    fn test_strips_punctuation() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("cat, sat. on?!"), "cat sat on");
    }

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_keeps_digits() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("chapter 12"), "chapter 12");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }

    #[test]
    fn test_punctuation_only() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("... !!! ---"), "");
    }
}
