//! End-date placeholder resolution
//!
//! Range templates are formatted against the start instant, but may embed
//! `{X}` groups naming a single token to be evaluated against the end instant
//! instead. Resolution runs as a two-phase pipeline: the template is first
//! shielded so the compound formatter cannot consume the bracketed letters,
//! then formatted against the start instant, and finally every surviving
//! `{X}` group is substituted with the end-instant value of its token.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use tracing::debug;

use crate::calendar;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{([a-zA-Z])\}").expect("Failed to compile placeholder regex")
    })
}

/// A template whose placeholder groups are protected from the compound
/// formatter
///
/// Shielding inserts a backslash escape in front of each bracketed letter
/// (`{d}` becomes `{\d}`), so the first formatting pass emits the group
/// verbatim instead of reading the letter as a token. The round trip is
/// lossless: formatting a shielded template restores the original `{d}`
/// markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldedTemplate(String);

impl ShieldedTemplate {
    /// Shield every single-letter placeholder group in a template
    pub fn shield(template: &str) -> Self {
        let shielded = placeholder_regex().replace_all(template, r"{\${1}}");
        Self(shielded.into_owned())
    }

    /// The shielded template text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolve a range template against a start and an end instant
///
/// The template is formatted against `start`; every `{X}` placeholder group
/// is then substituted with `X` formatted against `end`. Each distinct
/// letter is resolved once and substituted at every occurrence of its group.
/// Bracket groups that are not a single letter are not placeholders and pass
/// through unsubstituted.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use daterange_formatter::resolve;
///
/// let start: DateTime<FixedOffset> = "2024-03-01T00:00:00+00:00".parse().unwrap();
/// let end: DateTime<FixedOffset> = "2024-03-15T00:00:00+00:00".parse().unwrap();
/// assert_eq!(resolve("d - {d} F Y", &start, &end), "01 - 15 March 2024");
/// ```
pub fn resolve(template: &str, start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> String {
    let shielded = ShieldedTemplate::shield(template);
    let formatted = calendar::format_pattern(start, shielded.as_str());

    let mut letters: Vec<char> = placeholder_regex()
        .captures_iter(&formatted)
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().chars().next()))
        .collect();
    letters.sort_unstable();
    letters.dedup();

    if !letters.is_empty() {
        debug!(?letters, template, "Substituting end-date placeholders");
    }

    let mut resolved = formatted;
    for token in letters {
        let value = calendar::format_token(end, token);
        resolved = resolved.replace(&format!("{{{token}}}"), &value);
    }
    resolved
}
