// tests/pagination.rs

use dnafl::paging::{paginate, PAGE_SIZE};
use dnafl::query::{self, Filter};
use dnafl::store::Table;

fn table_with_rows(n: usize) -> Table {
    let mut text = String::from("Name,County,Date\n");
    for i in 0..n {
        text.push_str(&format!("row{},X,2024-01-01\n", i));
    }
    Table::from_csv_text(&text)
}

#[test]
fn page_size_is_fifty() {
    assert_eq!(PAGE_SIZE, 50);
}

#[test]
fn one_hundred_twenty_rows_make_three_pages() {
    let t = table_with_rows(120);
    let view = query::apply(&t, &Filter::default(), None);

    let p0 = paginate(&view, 0);
    assert_eq!(p0.total_pages, 3);
    assert_eq!((p0.start, p0.end), (0, 50));

    // Page 2 covers rows 51-100.
    let p1 = paginate(&view, 1);
    assert_eq!((p1.start, p1.end), (50, 100));
    assert_eq!(p1.display_range(), (51, 100));

    let p2 = paginate(&view, 2);
    assert_eq!((p2.start, p2.end), (100, 120));
}

#[test]
fn exact_multiple_has_no_phantom_page() {
    let t = table_with_rows(100);
    let view = query::apply(&t, &Filter::default(), None);
    assert_eq!(paginate(&view, 0).total_pages, 2);
}

#[test]
fn out_of_range_index_clamps_to_last_page() {
    let t = table_with_rows(120);
    let view = query::apply(&t, &Filter::default(), None);
    let p = paginate(&view, 99);
    assert_eq!(p.page_index, 2);
    assert_eq!((p.start, p.end), (100, 120));
}

#[test]
fn empty_view_is_one_empty_page() {
    let t = table_with_rows(0);
    let view = query::apply(&t, &Filter::default(), None);
    let p = paginate(&view, 5);
    assert_eq!(p.total_pages, 1);
    assert_eq!(p.page_index, 0);
    assert_eq!((p.start, p.end), (0, 0));
    assert_eq!(p.display_range(), (0, 0));
}

#[test]
fn page_index_never_leaves_valid_range() {
    for rows in [0usize, 1, 49, 50, 51, 120] {
        let t = table_with_rows(rows);
        let view = query::apply(&t, &Filter::default(), None);
        for requested in [0usize, 1, 2, 3, 1000] {
            let p = paginate(&view, requested);
            assert!(p.total_pages >= 1);
            assert!(p.page_index < p.total_pages, "rows={rows} requested={requested}");
        }
    }
}
