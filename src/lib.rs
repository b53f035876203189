// src/lib.rs
//! Rule-based English tokenizer that reports paragraph, sentence, token and
//! type counts together with a token frequency listing.
//!
//! ```
//! let report = tokenstats::analyze("He's here.");
//! assert_eq!(report.token_count(), 4);
//! assert_eq!(report.sentence_count(), 1);
//! ```

pub mod analyzer;
pub mod config;
pub mod distribution;
pub mod document;
pub mod error;
pub mod logging;
pub mod paragraph;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod sentence;

pub use analyzer::{analyze, Analyzer};
pub use config::{AnalyzerConfig, DEFAULT_OUTPUT_PATH};
pub use distribution::{build_distribution, FrequencyTable};
pub use error::{RuleError, TokenStatsError};
pub use paragraph::count_paragraphs;
pub use pipeline::{english_pipeline, tokenize, tokenize_opt, RulePipeline};
pub use report::{format_report, Report};
pub use rules::Rule;
pub use sentence::{count_sentences, Locale, SentenceSegmenter, UnicodeSentenceSegmenter};
