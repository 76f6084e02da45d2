//! Grammar port used when rendering message templates.

/// Pluralization helper supplied by the presentation layer.
pub trait Grammar: Send + Sync {
    /// Returns `word` inflected for `count`.
    fn pluralize(&self, word: &str, count: u32) -> String;
}

/// Naive English rules: `1 turn`, `2 turns`, `0 turns`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishGrammar;

impl Grammar for EnglishGrammar {
    fn pluralize(&self, word: &str, count: u32) -> String {
        if count == 1 {
            return word.to_string();
        }
        if ["s", "x", "z", "ch", "sh"].iter().any(|ending| word.ends_with(ending)) {
            format!("{word}es")
        } else {
            format!("{word}s")
        }
    }
}
