//! Granularity classification for date ranges

use chrono::{DateTime, Datelike, FixedOffset};
use tracing::debug;

/// The coarseness at which the two bounds of a range differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Both bounds fall on the same calendar day
    OneDay,
    /// Both bounds fall in the same calendar month
    OneMonth,
    /// Both bounds fall in the same calendar year
    SeveralMonths,
    /// The bounds fall in different calendar years
    SeveralYears,
}

/// Classify how much the two bounds of a range differ
///
/// Comparison is on calendar fields, never on raw instant equality, so two
/// instants on the same day at different times of day still classify as
/// [`Granularity::OneDay`]. Checks run most-specific-first and return on the
/// first match.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use daterange_formatter::{classify, Granularity};
///
/// let start: DateTime<FixedOffset> = "2024-03-01T00:00:00+00:00".parse().unwrap();
/// let end: DateTime<FixedOffset> = "2024-03-15T00:00:00+00:00".parse().unwrap();
/// assert_eq!(classify(&start, &end), Granularity::OneMonth);
/// ```
pub fn classify(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> Granularity {
    let same_year = start.year() == end.year();
    let same_month = same_year && start.month() == end.month();
    let same_day = same_month && start.day() == end.day();

    let granularity = if same_day {
        Granularity::OneDay
    } else if same_month {
        Granularity::OneMonth
    } else if same_year {
        Granularity::SeveralMonths
    } else {
        Granularity::SeveralYears
    };

    debug!(?granularity, "Classified date range");
    granularity
}
