#![deny(clippy::panic, clippy::print_stderr, clippy::print_stdout)]

//! # Date Range Formatter
//!
//! Granularity-aware rendering of date ranges into human-readable text and
//! machine-readable RFC3339 interval attributes.
//!
//! Given a start instant and an optional end instant, the formatter picks one
//! of several configurable display templates based on how much the two
//! instants differ:
//!
//! - **Same calendar day**: the `one_day` template
//! - **Same calendar month**: the `one_month` template
//! - **Same calendar year**: the `several_months` template
//! - **Different years**: the `several_years` template
//!
//! Templates mix literal characters with single-letter calendar tokens
//! evaluated against the start instant; a bracketed letter such as `{d}` is
//! evaluated against the end instant instead, so one template can mention
//! both bounds ("01 - 15 March 2024"). A missing end date, or an end equal
//! to the start, falls back to the `single` template.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{DateTime, FixedOffset};
//! use daterange_formatter::{DateRange, FormatSettings, build};
//!
//! let start: DateTime<FixedOffset> = "2024-03-01T00:00:00+00:00".parse().unwrap();
//! let end: DateTime<FixedOffset> = "2024-03-15T00:00:00+00:00".parse().unwrap();
//!
//! let output = build(&DateRange::new(start, Some(end)), &FormatSettings::default());
//! assert_eq!(output.display_text, "01 - 15 March 2024");
//! assert_eq!(
//!     output.iso_attribute,
//!     "2024-03-01T00:00:00+00:00/2024-03-15T00:00:00+00:00"
//! );
//! ```
//!
//! ## Configurable Templates
//!
//! ```
//! use chrono::{DateTime, FixedOffset};
//! use daterange_formatter::{DateRange, FormatSettings, build};
//!
//! let start: DateTime<FixedOffset> = "2024-03-01T00:00:00+00:00".parse().unwrap();
//! let end: DateTime<FixedOffset> = "2025-06-15T00:00:00+00:00".parse().unwrap();
//!
//! let settings = FormatSettings::default().with_several_years("M Y - {M} {Y}");
//! let output = build(&DateRange::new(start, Some(end)), &settings);
//! assert_eq!(output.display_text, "Mar 2024 - Jun 2025");
//! ```

pub mod calendar;
pub mod error;
pub mod range;
pub mod settings;

// Re-export main types for convenience
pub use error::{FormatterError, Result};
pub use range::{DateRange, FormattedOutput, Granularity, ShieldedTemplate, build, classify, resolve};
pub use settings::{FormatSettings, PartialFormatSettings};
