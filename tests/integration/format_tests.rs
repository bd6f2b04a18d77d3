use chrono::{DateTime, FixedOffset};
use daterange_formatter::{DateRange, FormatSettings, Granularity, build, classify};
use rstest::rstest;
use tracing_test::traced_test;

fn instant(s: &str) -> DateTime<FixedOffset> {
    s.parse().expect("test instant must parse")
}

#[rstest]
#[case::same_day_different_times(
    "2024-06-10T00:00:00+00:00",
    "2024-06-10T12:00:00+00:00",
    Granularity::OneDay
)]
#[case::same_month("2024-03-01T00:00:00+00:00", "2024-03-15T00:00:00+00:00", Granularity::OneMonth)]
#[case::same_year(
    "2024-03-15T00:00:00+00:00",
    "2024-11-02T00:00:00+00:00",
    Granularity::SeveralMonths
)]
#[case::different_years(
    "2024-01-05T00:00:00+00:00",
    "2025-03-20T00:00:00+00:00",
    Granularity::SeveralYears
)]
#[case::year_boundary(
    "2024-12-31T23:00:00+00:00",
    "2025-01-01T01:00:00+00:00",
    Granularity::SeveralYears
)]
fn test_granularity_classification(
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: Granularity,
) {
    assert_eq!(classify(&instant(start), &instant(end)), expected);
}

#[rstest]
#[case::one_day(
    "2024-06-10T00:00:00+00:00",
    "2024-06-10T12:00:00+00:00",
    "10 June 2024"
)]
#[case::one_month(
    "2024-03-01T00:00:00+00:00",
    "2024-03-15T00:00:00+00:00",
    "01 - 15 March 2024"
)]
#[case::several_months(
    "2024-03-01T00:00:00+00:00",
    "2024-08-15T00:00:00+00:00",
    "01 March - 15 August 2024"
)]
#[case::several_years(
    "2024-01-05T00:00:00+00:00",
    "2025-03-20T00:00:00+00:00",
    "05 January 2024 - 20 March 2025"
)]
fn test_default_templates_per_granularity(
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: &str,
) {
    let range = DateRange::new(instant(start), Some(instant(end)));
    let output = build(&range, &FormatSettings::default());
    assert_eq!(output.display_text, expected);
}

#[test]
fn test_no_end_date_produces_single_timestamp_attribute() {
    let range = DateRange::single(instant("2024-06-10T00:00:00+00:00"));
    let output = build(&range, &FormatSettings::default());

    assert_eq!(output.display_text, "10 June 2024");
    assert!(!output.iso_attribute.contains('/'));

    // The attribute must parse back to exactly the start instant.
    let parsed: DateTime<FixedOffset> = output
        .iso_attribute
        .parse()
        .expect("single attribute must be valid RFC3339");
    assert_eq!(parsed, range.start);
}

#[test]
fn test_equal_bounds_short_circuit_to_single() {
    let at = instant("2024-06-10T00:00:00+00:00");
    let range = DateRange::new(at, Some(at));
    let output = build(&range, &FormatSettings::default());

    assert!(!output.iso_attribute.contains('/'));
    assert_eq!(output.iso_attribute, "2024-06-10T00:00:00+00:00");
}

#[test]
fn test_range_attribute_round_trips_both_bounds() {
    let start = instant("2024-03-01T08:30:00+02:00");
    let end = instant("2024-03-15T17:45:00+02:00");
    let output = build(&DateRange::new(start, Some(end)), &FormatSettings::default());

    let (iso_start, iso_end) = output
        .iso_attribute
        .split_once('/')
        .expect("range attribute must contain exactly one separator");
    let parsed_start: DateTime<FixedOffset> =
        iso_start.parse().expect("start must be valid RFC3339");
    let parsed_end: DateTime<FixedOffset> = iso_end.parse().expect("end must be valid RFC3339");

    assert_eq!(parsed_start, start);
    assert_eq!(parsed_end, end);
}

#[test]
fn test_build_is_idempotent() {
    let range = DateRange::new(
        instant("2024-03-01T00:00:00+00:00"),
        Some(instant("2025-06-15T00:00:00+00:00")),
    );
    let settings = FormatSettings::default();

    let first = build(&range, &settings);
    let second = build(&range, &settings);
    assert_eq!(first, second);
}

#[test]
fn test_custom_templates_across_granularities() {
    let settings = FormatSettings::default()
        .with_one_month("j. - {j}. F Y")
        .with_several_years("j. F Y - {j}. {F} {Y}");

    let one_month = build(
        &DateRange::new(
            instant("2024-03-01T00:00:00+00:00"),
            Some(instant("2024-03-15T00:00:00+00:00")),
        ),
        &settings,
    );
    assert_eq!(one_month.display_text, "1. - 15. March 2024");

    let several_years = build(
        &DateRange::new(
            instant("2024-03-01T00:00:00+00:00"),
            Some(instant("2025-06-15T00:00:00+00:00")),
        ),
        &settings,
    );
    assert_eq!(several_years.display_text, "1. March 2024 - 15. June 2025");
}

#[test]
fn test_templates_pass_non_ascii_literals_through() {
    let settings = FormatSettings::default().with_one_month("d \u{2013} {d} F Y");
    let output = build(
        &DateRange::new(
            instant("2024-03-01T00:00:00+00:00"),
            Some(instant("2024-03-15T00:00:00+00:00")),
        ),
        &settings,
    );
    assert_eq!(output.display_text, "01 \u{2013} 15 March 2024");
}

#[traced_test]
#[test]
fn test_classification_is_logged() {
    let range = DateRange::new(
        instant("2024-03-01T00:00:00+00:00"),
        Some(instant("2024-03-15T00:00:00+00:00")),
    );
    build(&range, &FormatSettings::default());
    assert!(logs_contain("Classified date range"));
}
