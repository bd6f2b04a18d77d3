//! Date range rendering
//!
//! This module turns a field value (a start instant and an optional end
//! instant) into a display string plus a machine-readable RFC3339 interval
//! attribute. The pieces compose in a fixed order: the granularity
//! classifier picks which configured template applies, the placeholder
//! resolver substitutes end-date components into it, and the output builder
//! wires both together and handles the single-date fallback.

mod builder;
mod granularity;
mod placeholder;

pub use builder::build;
pub use granularity::{Granularity, classify};
pub use placeholder::{ShieldedTemplate, resolve};

use chrono::{DateTime, FixedOffset};

/// One field value: a start instant and an optional end instant
///
/// Instants arrive already resolved; no timezone ambiguity is handled here.
/// When `end` is present it is assumed not to precede `start`, but equal
/// bounds are valid and render as a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl DateRange {
    /// Create a range from a start instant and an optional end instant
    pub fn new(start: DateTime<FixedOffset>, end: Option<DateTime<FixedOffset>>) -> Self {
        Self { start, end }
    }

    /// Create a range with no end date
    pub fn single(start: DateTime<FixedOffset>) -> Self {
        Self { start, end: None }
    }
}

/// The rendered result for one field value
///
/// `iso_attribute` is a single RFC3339 timestamp, or two joined by `/` for a
/// range; a presentation layer typically emits it as the `datetime`
/// attribute of a `<time>` element with `display_text` as the text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    pub iso_attribute: String,
    pub display_text: String,
}
