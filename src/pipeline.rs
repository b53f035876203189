// src/pipeline.rs
use std::borrow::Cow;

use lazy_static::lazy_static;
use log::{trace, warn};

use crate::error::RuleError;
use crate::rules::{english_rules, Rule};

/// An ordered rewrite chain followed by a whitespace split.
#[derive(Debug)]
pub struct RulePipeline {
    rules: Vec<Rule>,
}

lazy_static! {
    static ref ENGLISH_PIPELINE: RulePipeline = RulePipeline::english()
        .unwrap_or_else(|e| panic!("Built-in English rules failed to compile: {}", e));
}

impl RulePipeline {
    pub fn new(rules: Vec<Rule>) -> Self {
        RulePipeline { rules }
    }

    /// The canonical English rule set from [`english_rules`].
    pub fn english() -> Result<Self, RuleError> {
        Ok(Self::new(english_rules()?))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule in order over a working copy of `text`.
    ///
    /// A rule that fails at match time (backtrack limit) is skipped with a
    /// warning, so rewriting never fails.
    pub fn rewrite(&self, text: &str) -> String {
        let mut working = text.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&working) {
                Ok(Cow::Owned(s)) => Some(s),
                Ok(Cow::Borrowed(_)) => None,
                Err(e) => {
                    warn!("Skipping rule `{}`: {}", rule.name(), e);
                    None
                }
            };
            if let Some(s) = rewritten {
                trace!("[rewrite] {} -> {:?}", rule.name(), s);
                working = s;
            }
        }
        working
    }

    /// Rewrites `text` and splits it on runs of whitespace.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.rewrite(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

/// The process-wide English pipeline, compiled on first use.
pub fn english_pipeline() -> &'static RulePipeline {
    &ENGLISH_PIPELINE
}

/// Tokenizes `text` with the English pipeline.
pub fn tokenize(text: &str) -> Vec<String> {
    ENGLISH_PIPELINE.tokenize(text)
}

/// Absent text tokenizes to nothing.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}
