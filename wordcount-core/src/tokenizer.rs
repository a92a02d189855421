//! Whitespace tokenizer
//!
//! Splits on whitespace and folds case. Punctuation stays attached to the
//! token it touches, so `"be."` and `"be"` are distinct words.

/// Tokenizer that splits text on runs of whitespace
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Fold every token to lowercase (default: true)
    pub lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl Tokenizer {
    /// Create a tokenizer with explicit case folding
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    /// Iterate over the tokens of `text`
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        let lowercase = self.lowercase;
        text.split_whitespace().map(move |token| {
            if lowercase {
                token.to_lowercase()
            } else {
                token.to_string()
            }
        })
    }

    /// Tokenize text into words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("Hello World! This is a test.");
        assert_eq!(tokens, vec!["hello", "world!", "this", "is", "a", "test."]);
    }

    #[test]
    fn test_mixed_whitespace() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("  one\ttwo\n\nthree  \r\n four ");
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_punctuation_tokens_kept() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("-- Football Coach");
        assert_eq!(tokens, vec!["--", "football", "coach"]);
    }

    #[test]
    fn test_preserve_case() {
        let tokenizer = Tokenizer::new(false);
        let tokens = tokenizer.tokenize("We are");
        assert_eq!(tokens, vec!["We", "are"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \n\t ").is_empty());
    }
}
