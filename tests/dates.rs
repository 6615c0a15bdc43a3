// tests/dates.rs
//
// Date-format precedence is a fixed, ordered list; these tests pin it.

use chrono::NaiveDate;
use dnafl::record::parse_date;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn iso_format_parses_first() {
    assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
}

#[test]
fn us_slash_format_is_month_day_year() {
    assert_eq!(parse_date("01/05/2024"), Some(ymd(2024, 1, 5)));
    assert_eq!(parse_date("12/31/2023"), Some(ymd(2023, 12, 31)));
}

#[test]
fn month_year_resolves_to_first_of_month() {
    assert_eq!(parse_date("01-24"), Some(ymd(2024, 1, 1)));
    assert_eq!(parse_date("11-09"), Some(ymd(2009, 11, 1)));
}

#[test]
fn long_month_form_parses_last() {
    assert_eq!(parse_date("January 5, 2024"), Some(ymd(2024, 1, 5)));
    assert_eq!(parse_date("December 31, 2023"), Some(ymd(2023, 12, 31)));
}

#[test]
fn iso_wins_over_month_year_on_dash_strings() {
    // A full ISO date also contains dashes; the ordered list must classify
    // it as ISO, never as month-year.
    assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
}

#[test]
fn garbage_and_blanks_do_not_parse() {
    assert_eq!(parse_date("bad-date"), None);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("   "), None);
    assert_eq!(parse_date("13-24"), None); // no thirteenth month
    assert_eq!(parse_date("Unknown"), None);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(parse_date("  2024-01-05  "), Some(ymd(2024, 1, 5)));
}
