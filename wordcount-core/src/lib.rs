//! Wordcount Core - word frequency counting and reporting
//!
//! Reads a text file, splits it on whitespace into lowercase words, and
//! reports the counts either alphabetically or as a top-N frequency listing.

pub mod counter;
pub mod error;
pub mod report;
pub mod tokenizer;

pub use counter::{create_word_dict, CountStats, WordCounts};
pub use error::{Result, WordCountError};
pub use report::{print_top, print_words, write_lines, ReportLine, TOP_COUNT};
pub use tokenizer::Tokenizer;
