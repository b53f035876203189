// src/rules.rs
//! The English rewrite rules, in application order.
//!
//! Every rule rewrites the whole working text. Context-sensitive rules are
//! `fancy_regex` patterns (they need lookbehind); rules that only pad fixed
//! strings with spaces use an Aho-Corasick automaton over all their needles.
//!
//! "Word character" here is ASCII `[0-9A-Za-z_]`. Letters outside ASCII are
//! treated as non-word by every lookaround, so `café's` is not split the way
//! `cafe's` is. This is a known limitation of the rule set.

use std::borrow::Cow;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use fancy_regex::{NoExpand, Regex};

use crate::error::RuleError;

// ----- REGEX CHAR CLASSES -----
/// Content of the ASCII word-character class, for use inside `[...]`.
pub const WORD_CONTENT_STR: &str = "0-9A-Za-z_";
/// Word characters except lowercase `s`, for the leading-apostrophe rule.
const WORD_EXCEPT_S_CONTENT_STR: &str = "0-9A-Za-rt-z_";

enum Rewrite {
    Pattern {
        regex: Regex,
        replacement: &'static str,
    },
    Pad {
        matcher: AhoCorasick,
        replacements: Vec<String>,
    },
}

/// One named step of the rewrite chain.
pub struct Rule {
    name: &'static str,
    rewrite: Rewrite,
}

impl Rule {
    /// Replaces every match of `pattern` with `replacement`, taken literally.
    pub fn pattern(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::Pattern { name, source })?;
        Ok(Rule {
            name,
            rewrite: Rewrite::Pattern { regex, replacement },
        })
    }

    /// Surrounds every occurrence of each needle with a space on both sides.
    pub fn pad(name: &'static str, needles: &[&str]) -> Result<Self, RuleError> {
        let matcher = AhoCorasickBuilder::new()
            // Longer needles listed first win at the same start position.
            .match_kind(MatchKind::LeftmostFirst)
            .build(needles)
            .map_err(|source| RuleError::Literals { name, source })?;
        let replacements = needles.iter().map(|n| format!(" {} ", n)).collect();
        Ok(Rule {
            name,
            rewrite: Rewrite::Pad {
                matcher,
                replacements,
            },
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the rule once over `text`. Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Result<Cow<'t, str>, RuleError> {
        match &self.rewrite {
            Rewrite::Pattern { regex, replacement } => regex
                .try_replacen(text, 0, NoExpand(*replacement))
                .map_err(|source| RuleError::Apply {
                    name: self.name,
                    source,
                }),
            Rewrite::Pad {
                matcher,
                replacements,
            } => {
                if !matcher.is_match(text) {
                    return Ok(Cow::Borrowed(text));
                }
                Ok(Cow::Owned(matcher.replace_all(text, replacements)))
            }
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.rewrite {
            Rewrite::Pattern { regex, .. } => regex.as_str().to_string(),
            Rewrite::Pad { replacements, .. } => format!("pad {:?}", replacements),
        };
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("rewrite", &kind)
            .finish()
    }
}

/// Builds the English rule table. Order matters: clitics are expanded before
/// apostrophes are treated as quotes, and full stops are padded before the
/// leading-stop rule looks for a non-word character in front of them.
pub fn english_rules() -> Result<Vec<Rule>, RuleError> {
    let w = WORD_CONTENT_STR;
    // A clitic only ends where no word character or hyphen follows.
    let clitic_end = format!("(?![{}-])", w);

    Ok(vec![
        // Clitics
        Rule::pattern("clitic_not", &format!("n't{}", clitic_end), " not")?,
        Rule::pattern("clitic_will", &format!("'ll{}", clitic_end), " will")?,
        Rule::pattern("clitic_have", &format!("'ve{}", clitic_end), " have")?,
        Rule::pattern("clitic_would", &format!("'d{}", clitic_end), " would")?,
        Rule::pattern("clitic_are", &format!("'re{}", clitic_end), " are")?,
        // Lookbehinds must be fixed-width, so one alternative per length.
        // "here" and "there" must be whole words; "sphere's" stays possessive.
        Rule::pattern(
            "clitic_is",
            &format!(
                "(?:(?<=[Ss][Hh]e)|(?<=[Hh]e)|(?<=[Ii]t)\
                 |(?<=[Hh]ere)(?<![{w}][Hh]ere)\
                 |(?<=[Tt]here)(?<![{w}][Tt]here))'s{end}",
                w = w,
                end = clitic_end
            ),
            " is",
        )?,
        Rule::pattern(
            "clitic_s",
            &format!("(?<=[{}])'s{}", w, clitic_end),
            " 's",
        )?,
        Rule::pattern("clitic_am", &format!("I'm{}", clitic_end), "I am")?,
        // Punctuation
        Rule::pad("double_quote", &["\""])?,
        Rule::pattern(
            "leading_tick",
            &format!("(?<![{}])'(?![^{}])", w, WORD_EXCEPT_S_CONTENT_STR),
            " ' ",
        )?,
        Rule::pattern(
            "trailing_tick",
            &format!("(?<=[{}])'(?![{}])", w, w),
            " ' ",
        )?,
        Rule::pad("brackets", &["(", ")", "{", "}", "[", "]"])?,
        Rule::pattern("trailing_stop", &format!(r"\.(?![{}])", w), " . ")?,
        Rule::pattern("leading_stop", &format!(r"(?<![{}])\.", w), " . ")?,
        Rule::pattern("comma", ",(?![0-9])", " , ")?,
        Rule::pad("clause_marks", &[";", ":", "!", "?"])?,
        Rule::pattern("dollar", r"\s*\$(?=[0-9])", " $ ")?,
        Rule::pad("em_dash", &["--"])?,
        // "w/" is the one abbreviation whose slash stays attached.
        Rule::pattern(
            "slash",
            &format!("(?:(?<!w)|(?<=[{}]w))/", w),
            " / ",
        )?,
        Rule::pad("symbols", &["*", "~"])?,
    ])
}
