// src/report.rs
use std::fmt;

use crate::distribution::FrequencyTable;

/// Divider between the summary counts and the frequency listing.
pub const SEPARATOR: &str = "================================";

/// Statistics for one document, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    paragraph_count: usize,
    sentence_count: usize,
    token_count: usize,
    type_count: usize,
    sorted_entries: Vec<(String, usize)>,
}

impl Report {
    pub fn new(paragraph_count: usize, sentence_count: usize, distribution: &FrequencyTable) -> Self {
        Report {
            paragraph_count,
            sentence_count,
            token_count: distribution.total(),
            type_count: distribution.len(),
            sorted_entries: distribution.sorted_entries(),
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn type_count(&self) -> usize {
        self.type_count
    }

    /// `(token, count)` pairs by descending count, then ascending token.
    pub fn sorted_entries(&self) -> &[(String, usize)] {
        &self.sorted_entries
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# of paragraphs = {}", self.paragraph_count)?;
        writeln!(f, "# of sentences = {}", self.sentence_count)?;
        writeln!(f, "# of tokens = {}", self.token_count)?;
        writeln!(f, "# of types = {}", self.type_count)?;
        writeln!(f)?;
        writeln!(f, "{}", SEPARATOR)?;
        for (token, count) in &self.sorted_entries {
            writeln!(f, "{} {}", token, count)?;
        }
        Ok(())
    }
}

/// Renders the report in its fixed textual layout.
pub fn format_report(report: &Report) -> String {
    report.to_string()
}
