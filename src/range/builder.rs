//! Output construction for date range field values

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use super::granularity::{Granularity, classify};
use super::placeholder::resolve;
use super::{DateRange, FormattedOutput};
use crate::calendar;
use crate::settings::FormatSettings;

/// Render one field value into display text and a machine-readable interval
/// attribute
///
/// A missing end date, or an end date exactly equal to the start instant,
/// renders as a single date with a single RFC3339 attribute. Anything else
/// renders as a range: the template matching the range's granularity is
/// resolved against both bounds and the attribute carries both timestamps
/// joined by `/`.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use daterange_formatter::{DateRange, FormatSettings, build};
///
/// let start: DateTime<FixedOffset> = "2024-03-01T00:00:00+00:00".parse().unwrap();
/// let end: DateTime<FixedOffset> = "2024-03-15T00:00:00+00:00".parse().unwrap();
///
/// let output = build(&DateRange::new(start, Some(end)), &FormatSettings::default());
/// assert_eq!(output.display_text, "01 - 15 March 2024");
/// assert_eq!(
///     output.iso_attribute,
///     "2024-03-01T00:00:00+00:00/2024-03-15T00:00:00+00:00"
/// );
/// ```
pub fn build(range: &DateRange, settings: &FormatSettings) -> FormattedOutput {
    match range.end {
        Some(end) if end != range.start => build_range(&range.start, &end, settings),
        _ => build_single(&range.start, settings),
    }
}

/// Single date: no end date provided, or the end equals the start exactly
fn build_single(start: &DateTime<FixedOffset>, settings: &FormatSettings) -> FormattedOutput {
    debug!("Rendering single date");
    FormattedOutput {
        iso_attribute: calendar::rfc3339(start),
        display_text: calendar::format_pattern(start, &settings.single),
    }
}

fn build_range(
    start: &DateTime<FixedOffset>,
    end: &DateTime<FixedOffset>,
    settings: &FormatSettings,
) -> FormattedOutput {
    let granularity = classify(start, end);
    let template = match granularity {
        Granularity::OneDay => &settings.one_day,
        Granularity::OneMonth => &settings.one_month,
        Granularity::SeveralMonths => &settings.several_months,
        Granularity::SeveralYears => &settings.several_years,
    };

    FormattedOutput {
        iso_attribute: format!("{}/{}", calendar::rfc3339(start), calendar::rfc3339(end)),
        display_text: resolve(template, start, end),
    }
}
