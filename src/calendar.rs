//! Calendar formatting primitive
//!
//! This module implements the single-letter token alphabet that all display
//! templates are written against. Each token denotes one calendar component
//! of an instant (day, month name, year, and so on); every other character in
//! a pattern is emitted literally, and a backslash escapes the character that
//! follows it so token letters can appear verbatim in the output.

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike};

/// Format a single token character against an instant
///
/// Unrecognized characters are returned unchanged as literals, never as an
/// error.
///
/// # Arguments
///
/// * `instant` - The instant to read calendar components from
/// * `token` - A single token character, e.g. `'d'`, `'F'`, `'Y'`
///
/// # Example
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use daterange_formatter::calendar::format_token;
///
/// let instant: DateTime<FixedOffset> = "2024-03-15T00:00:00+00:00".parse().unwrap();
/// assert_eq!(format_token(&instant, 'd'), "15");
/// assert_eq!(format_token(&instant, 'F'), "March");
/// assert_eq!(format_token(&instant, '-'), "-");
/// ```
pub fn format_token(instant: &DateTime<FixedOffset>, token: char) -> String {
    token_value(instant, token).unwrap_or_else(|| token.to_string())
}

/// Format a compound pattern against an instant
///
/// Every character of the pattern is treated as either a token or a literal.
/// A backslash escapes the next character, forcing it to be emitted
/// literally even when it is a token letter.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use daterange_formatter::calendar::format_pattern;
///
/// let instant: DateTime<FixedOffset> = "2024-03-15T00:00:00+00:00".parse().unwrap();
/// assert_eq!(format_pattern(&instant, "d F Y"), "15 March 2024");
/// assert_eq!(format_pattern(&instant, r"\d F Y"), "d March 2024");
/// ```
pub fn format_pattern(instant: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push(c),
            }
            continue;
        }
        match token_value(instant, c) {
            Some(value) => out.push_str(&value),
            None => out.push(c),
        }
    }
    out
}

/// Render an instant as a strict RFC3339 timestamp
///
/// This is the machine-readable representation used for interval attributes,
/// with seconds precision and a numeric offset.
pub fn rfc3339(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Resolve one token character to its formatted value, or `None` for a
/// literal
fn token_value(instant: &DateTime<FixedOffset>, token: char) -> Option<String> {
    let value = match token {
        // Day
        'd' => format!("{:02}", instant.day()),
        'j' => instant.day().to_string(),
        'D' => instant.format("%a").to_string(),
        'l' => instant.format("%A").to_string(),
        'N' => instant.weekday().number_from_monday().to_string(),
        'w' => instant.weekday().num_days_from_sunday().to_string(),
        'S' => ordinal_suffix(instant.day()).to_string(),
        'z' => instant.ordinal0().to_string(),

        // Week
        'W' => instant.iso_week().week().to_string(),
        'o' => instant.iso_week().year().to_string(),

        // Month
        'F' => instant.format("%B").to_string(),
        'M' => instant.format("%b").to_string(),
        'm' => format!("{:02}", instant.month()),
        'n' => instant.month().to_string(),
        't' => days_in_month(instant.year(), instant.month()).to_string(),

        // Year
        'L' => u32::from(is_leap_year(instant.year())).to_string(),
        'Y' => instant.year().to_string(),
        'y' => format!("{:02}", instant.year().rem_euclid(100)),

        // Time
        'a' => if instant.hour12().0 { "pm" } else { "am" }.to_string(),
        'A' => if instant.hour12().0 { "PM" } else { "AM" }.to_string(),
        'g' => instant.hour12().1.to_string(),
        'G' => instant.hour().to_string(),
        'h' => format!("{:02}", instant.hour12().1),
        'H' => format!("{:02}", instant.hour()),
        'i' => format!("{:02}", instant.minute()),
        's' => format!("{:02}", instant.second()),
        'u' => format!("{:06}", instant.timestamp_subsec_micros()),
        'v' => format!("{:03}", instant.timestamp_subsec_millis()),

        // Timezone offset
        'e' | 'T' | 'P' => instant.format("%:z").to_string(),
        'O' => instant.format("%z").to_string(),
        'Z' => instant.offset().local_minus_utc().to_string(),

        // Full date/time
        'c' => rfc3339(instant),
        'r' => instant.to_rfc2822(),
        'U' => instant.timestamp().to_string(),

        _ => return None,
    };
    Some(value)
}

/// English ordinal suffix for a day of the month (1st, 2nd, 3rd, 4th, ...)
fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
