//! Word frequency counting

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;
use serde::Serialize;

use crate::error::{Result, WordCountError};
use crate::tokenizer::Tokenizer;

/// Occurrence count of every distinct word in one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordCounts {
    counts: AHashMap<String, u64>,
}

impl WordCounts {
    /// Count the words of `text` with the default tokenizer
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(&Tokenizer::default(), text)
    }

    /// Count the words of `text` with a custom tokenizer
    pub fn from_text_with(tokenizer: &Tokenizer, text: &str) -> Self {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for word in tokenizer.tokens(text) {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Read the whole file at `path` and count its words
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordCountError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let counts = Self::from_text(&text);
        let stats = counts.stats();
        debug!(
            "counted {} tokens, {} distinct words in {}",
            stats.total_tokens,
            stats.distinct_words,
            path.display()
        );
        Ok(counts)
    }

    /// Count for `word`, if it occurs
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when the source had no tokens
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Sum of all counts, equal to the number of tokens in the source
    pub fn total_tokens(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Token and distinct-word totals
    pub fn stats(&self) -> CountStats {
        CountStats {
            total_tokens: self.total_tokens(),
            distinct_words: self.len(),
        }
    }

    /// Consume the counts, returning the underlying word -> count map
    pub fn into_map(self) -> AHashMap<String, u64> {
        self.counts
    }
}

/// Build the word/count dictionary for the file at `path`
pub fn create_word_dict(path: impl AsRef<Path>) -> Result<WordCounts> {
    WordCounts::from_file(path)
}

/// Summary statistics for a [`WordCounts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountStats {
    pub total_tokens: u64,
    pub distinct_words: usize,
}
