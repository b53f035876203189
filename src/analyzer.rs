// src/analyzer.rs
use std::time::Instant;

use log::debug;

use crate::config::AnalyzerConfig;
use crate::distribution::FrequencyTable;
use crate::paragraph::count_paragraphs;
use crate::pipeline::{english_pipeline, RulePipeline};
use crate::report::Report;
use crate::sentence::{SentenceSegmenter, UnicodeSentenceSegmenter};

/// Computes a [`Report`] for a text. The three passes read the same input
/// and share nothing mutable, so they may run concurrently.
pub struct Analyzer<'p> {
    config: AnalyzerConfig,
    pipeline: &'p RulePipeline,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl Analyzer<'static> {
    /// English rules and UAX #29 sentence boundaries.
    pub fn new(config: AnalyzerConfig) -> Self {
        Analyzer {
            config,
            pipeline: english_pipeline(),
            segmenter: Box::new(UnicodeSentenceSegmenter),
        }
    }
}

impl<'p> Analyzer<'p> {
    pub fn with_parts(
        config: AnalyzerConfig,
        pipeline: &'p RulePipeline,
        segmenter: Box<dyn SentenceSegmenter>,
    ) -> Self {
        Analyzer {
            config,
            pipeline,
            segmenter,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> Report {
        let start = Instant::now();
        let locale = self.config.locale;

        let paragraphs = || count_paragraphs(text);
        let sentences = || self.segmenter.segment(text, locale);
        let distribution = || FrequencyTable::from_tokens(self.pipeline.tokenize(text));

        let (paragraph_count, (sentence_count, table)) = if self.config.parallel {
            rayon::join(paragraphs, || rayon::join(sentences, distribution))
        } else {
            (paragraphs(), (sentences(), distribution()))
        };

        debug!(
            "Analyzed {} bytes in {:?} (parallel: {}, locale: {})",
            text.len(),
            start.elapsed(),
            self.config.parallel,
            locale.tag()
        );
        Report::new(paragraph_count, sentence_count, &table)
    }
}

/// Analyzes `text` with the default configuration.
pub fn analyze(text: &str) -> Report {
    Analyzer::new(AnalyzerConfig::default()).analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Locale;

    struct FixedSegmenter(usize);

    impl SentenceSegmenter for FixedSegmenter {
        fn segment(&self, _text: &str, _locale: Locale) -> usize {
            self.0
        }
    }

    #[test]
    fn empty_text() {
        let report = analyze("");
        assert_eq!(report.paragraph_count(), 1);
        assert_eq!(report.sentence_count(), 0);
        assert_eq!(report.token_count(), 0);
        assert_eq!(report.type_count(), 0);
    }

    #[test]
    fn counts_agree_with_entries() {
        let report = analyze("The cat sat. The cat ran! Then it slept.");
        assert_eq!(report.paragraph_count(), 1);
        assert_eq!(report.sentence_count(), 3);
        let total: usize = report.sorted_entries().iter().map(|(_, c)| c).sum();
        assert_eq!(report.token_count(), total);
        assert_eq!(report.type_count(), report.sorted_entries().len());
        assert_eq!(report.sorted_entries()[0], (".".to_string(), 2));
    }

    #[test]
    fn blank_line_starts_paragraph() {
        let report = analyze("First paragraph here.\n\nSecond paragraph here.");
        assert_eq!(report.paragraph_count(), 2);
        assert_eq!(report.token_count(), 8);
    }

    #[test]
    fn sequential_matches_parallel() {
        let text = "It's late. We'll go (maybe) at 5:30, won't we?\n\nYes.";
        let parallel = Analyzer::new(AnalyzerConfig::default()).analyze(text);
        let sequential = Analyzer::new(AnalyzerConfig {
            parallel: false,
            ..AnalyzerConfig::default()
        })
        .analyze(text);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn segmenter_is_pluggable() {
        let analyzer = Analyzer::with_parts(
            AnalyzerConfig::default(),
            english_pipeline(),
            Box::new(FixedSegmenter(42)),
        );
        assert_eq!(analyzer.analyze("One. Two.").sentence_count(), 42);
        assert!(analyzer.config().parallel);
    }
}
