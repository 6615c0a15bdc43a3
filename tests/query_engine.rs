// tests/query_engine.rs
//
// Filtering and sorting semantics over the canonical 3-row dataset plus
// stability/direction checks.

use chrono::NaiveDate;
use dnafl::query::{self, Direction, Filter, SortSpec};
use dnafl::store::Table;

const SAMPLE: &str = "Name,County,Date\nA,Lee,2024-01-05\nB,Lee,bad-date\nC,Collier,2024-02-01\n";

fn sample_table() -> Table {
    Table::from_csv_text(SAMPLE)
}

fn names<'a>(view: &query::View<'a>) -> Vec<String> {
    view.iter().map(|r| r.cell(0).to_string()).collect()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn loads_three_rows_and_flags_the_bad_date() {
    let t = sample_table();
    assert_eq!(t.len(), 3);
    assert!(t.records[0].date_valid);
    assert!(!t.records[1].date_valid);
    assert!(t.records[1].parsed_date.is_none());
    assert!(t.records[2].date_valid);
}

#[test]
fn empty_filter_matches_all_rows_in_table_order() {
    let t = sample_table();
    let view = query::apply(&t, &Filter::default(), None);
    assert_eq!(names(&view), vec!["A", "B", "C"]);
}

#[test]
fn date_range_excludes_invalid_dates() {
    let t = sample_table();
    let filter = Filter {
        date_from: Some(ymd(2024, 1, 1)),
        date_to: Some(ymd(2024, 1, 31)),
        ..Filter::default()
    };
    let view = query::apply(&t, &filter, None);
    assert_eq!(names(&view), vec!["A"]);
}

#[test]
fn invalid_dates_pass_when_no_bound_is_set() {
    let t = sample_table();
    let view = query::apply(&t, &Filter::default(), None);
    assert_eq!(view.len(), 3);
}

#[test]
fn date_bounds_are_inclusive() {
    let t = sample_table();
    let filter = Filter {
        date_from: Some(ymd(2024, 1, 5)),
        date_to: Some(ymd(2024, 2, 1)),
        ..Filter::default()
    };
    let view = query::apply(&t, &filter, None);
    assert_eq!(names(&view), vec!["A", "C"]);
}

#[test]
fn keyword_searches_all_columns_case_insensitively() {
    let t = sample_table();
    let filter = Filter { keyword: "lee".into(), ..Filter::default() };
    let view = query::apply(&t, &filter, None);
    assert_eq!(names(&view), vec!["A", "B"]);
}

#[test]
fn keyword_matches_across_the_concatenated_row() {
    let t = sample_table();
    // "A" + "Lee" concatenate with nothing in between; the keyword may
    // straddle the column boundary.
    let filter = Filter { keyword: "alee".into(), ..Filter::default() };
    let view = query::apply(&t, &filter, None);
    assert_eq!(names(&view), vec!["A"]);
}

#[test]
fn county_filter_is_exact_and_case_insensitive() {
    let t = sample_table();
    let filter = Filter { county: Some("collier".into()), ..Filter::default() };
    let view = query::apply(&t, &filter, None);
    assert_eq!(names(&view), vec!["C"]);
}

#[test]
fn date_sort_descending_puts_invalid_rows_last() {
    let t = sample_table();
    let sort = SortSpec { column: t.date_col.unwrap(), direction: Direction::Desc };
    let view = query::apply(&t, &Filter::default(), Some(&sort));
    assert_eq!(names(&view), vec!["C", "A", "B"]);
}

#[test]
fn date_sort_ascending_also_puts_invalid_rows_last() {
    let t = sample_table();
    let sort = SortSpec { column: t.date_col.unwrap(), direction: Direction::Asc };
    let view = query::apply(&t, &Filter::default(), Some(&sort));
    assert_eq!(names(&view), vec!["A", "C", "B"]);
}

#[test]
fn string_sort_is_case_insensitive_and_stable() {
    let t = Table::from_csv_text("Name,County,Date\nb,X,\nA,X,\na,X,\nB,X,\n");
    let sort = SortSpec { column: 0, direction: Direction::Asc };
    let view = query::apply(&t, &Filter::default(), Some(&sort));
    // Equal keys ("a"/"A", "b"/"B") keep their original relative order.
    assert_eq!(names(&view), vec!["A", "a", "b", "B"]);
}

#[test]
fn descending_string_sort_keeps_ties_stable() {
    let t = Table::from_csv_text("Name,County,Date\nb,X,\nA,X,\na,X,\nB,X,\n");
    let sort = SortSpec { column: 0, direction: Direction::Desc };
    let view = query::apply(&t, &Filter::default(), Some(&sort));
    assert_eq!(names(&view), vec!["b", "B", "A", "a"]);
}

#[test]
fn sort_toggle_flips_same_column_and_resets_new_column() {
    let first = SortSpec::toggle(None, 2);
    assert_eq!(first, SortSpec { column: 2, direction: Direction::Asc });

    let flipped = SortSpec::toggle(Some(&first), 2);
    assert_eq!(flipped.direction, Direction::Desc);

    let other = SortSpec::toggle(Some(&flipped), 0);
    assert_eq!(other, SortSpec { column: 0, direction: Direction::Asc });
}

#[test]
fn distinct_counties_are_deduped_and_sorted_case_insensitively() {
    let t = Table::from_csv_text("Name,County,Date\nA,Lee,\nB,collier,\nC,LEE,\nD,Brevard,\n");
    assert_eq!(t.distinct_counties(), &["Brevard".to_string(), "collier".to_string(), "Lee".to_string()]);
}

#[test]
fn filtered_out_rows_fail_at_least_one_clause() {
    let t = sample_table();
    let filter = Filter {
        keyword: "lee".into(),
        date_from: Some(ymd(2024, 1, 1)),
        ..Filter::default()
    };
    let view = query::apply(&t, &filter, None);
    assert_eq!(names(&view), vec!["A"]);
    // B fails the date clause (invalid date), C fails the keyword clause.
}

#[test]
fn empty_result_is_a_valid_view_not_an_error() {
    let t = sample_table();
    let filter = Filter { keyword: "nonexistent".into(), ..Filter::default() };
    let view = query::apply(&t, &filter, None);
    assert!(view.is_empty());
    assert!(view.rows_owned().is_empty());
}

#[test]
fn exported_rows_keep_original_date_text() {
    let t = sample_table();
    let view = query::apply(&t, &Filter::default(), None);
    let rows = view.rows_owned();
    // Dates re-stringify to their source text, not a re-parsed form.
    assert_eq!(rows[1][2], "bad-date");
    assert_eq!(rows[0][2], "2024-01-05");
}
