// src/config.rs
use crate::sentence::Locale;

/// Report path used when the caller names none.
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Run the paragraph, sentence and token passes on the rayon pool.
    pub parallel: bool,
    pub locale: Locale,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            parallel: true,
            locale: Locale::EnUs,
        }
    }
}
