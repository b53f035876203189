// src/sentence.rs
use unicode_segmentation::UnicodeSegmentation;

/// Locales a segmenter can be asked to break text for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
        }
    }
}

/// Counts the sentence segments a boundary detector finds in `text`.
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str, locale: Locale) -> usize;
}

/// UAX #29 sentence boundaries from `unicode-segmentation`.
///
/// The default UAX #29 rules are the rules for English, so the locale only
/// selects them and does not change the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str, _locale: Locale) -> usize {
        // Each extra newline of a blank line is a segment of its own.
        text.split_sentence_bounds()
            .filter(|s| !s.trim().is_empty())
            .count()
    }
}

/// Counts sentences in `text` for US English. Empty text has none.
pub fn count_sentences(text: &str) -> usize {
    UnicodeSentenceSegmenter.segment(text, Locale::EnUs)
}
