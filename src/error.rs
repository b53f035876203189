// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the I/O layer around the analyzer. The analysis itself never fails.
#[derive(Debug, Error)]
pub enum TokenStatsError {
    #[error("could not read input file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write report to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while building or running a single rewrite rule.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule `{name}` has an invalid pattern")]
    Pattern {
        name: &'static str,
        #[source]
        source: fancy_regex::Error,
    },
    #[error("rule `{name}` could not build its literal matcher")]
    Literals {
        name: &'static str,
        #[source]
        source: aho_corasick::BuildError,
    },
    #[error("rule `{name}` failed while rewriting")]
    Apply {
        name: &'static str,
        #[source]
        source: fancy_regex::Error,
    },
}
