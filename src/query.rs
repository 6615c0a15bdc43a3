// src/query.rs
//
// Filter + sort over a Table, producing a zero-copy View of row indices.
// `apply` has no side effects and returns a fresh View every call.

use chrono::NaiveDate;

use crate::record::Record;
use crate::store::Table;

/// AND-combined filter clauses. The default matches every row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// Case-insensitive substring matched against the concatenation of all
    /// column values of a row, a global search rather than per-column.
    pub keyword: String,
    /// Exact (case-insensitive) county match, when set.
    pub county: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Filter {
    pub fn matches(&self, table: &Table, rec: &Record) -> bool {
        if !self.keyword.is_empty() {
            let kw = self.keyword.to_lowercase();
            let concatenated = rec.cells.concat().to_lowercase();
            if !concatenated.contains(&kw) {
                return false;
            }
        }

        if let Some(county) = &self.county {
            let Some(col) = table.county_col else { return false };
            if !rec.cell(col).eq_ignore_ascii_case(county) {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            // A row without a parsable date cannot be range-checked.
            let Some(d) = rec.parsed_date else { return false };
            if let Some(from) = self.date_from {
                if d < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if d > to {
                    return false;
                }
            }
        }

        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn flip(self) -> Direction {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// One active sort at a time; no multi-column sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub direction: Direction,
}

impl SortSpec {
    pub fn new(column: usize) -> Self {
        Self { column, direction: Direction::Asc }
    }

    /// Clicking the active column flips direction; a new column resets
    /// to ascending.
    pub fn toggle(current: Option<&SortSpec>, column: usize) -> SortSpec {
        match current {
            Some(s) if s.column == column => SortSpec { column, direction: s.direction.flip() },
            _ => SortSpec::new(column),
        }
    }
}

/// Filtered/sorted projection: row indices into a borrowed Table, no copies.
pub struct View<'a> {
    pub row_ix: Vec<usize>,
    table: &'a Table,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    pub fn header(&self) -> &[String] {
        &self.table.header
    }

    /// Borrow a record by projected position.
    pub fn record(&self, i: usize) -> Option<&Record> {
        self.row_ix.get(i).and_then(|&ix| self.table.records.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.table.records.get(ix))
    }

    /// Materialize owned rows (export/copy boundary). Cells keep their
    /// original text; dates are not re-stringified from parsed form.
    pub fn rows_owned(&self) -> Vec<Vec<String>> {
        self.iter().map(|rec| rec.cells.clone()).collect()
    }
}

/// Apply filter then sort. Filtering keeps table order; sorting is stable,
/// so equal keys preserve their prior relative order.
pub fn apply<'a>(table: &'a Table, filter: &Filter, sort: Option<&SortSpec>) -> View<'a> {
    let mut row_ix: Vec<usize> = (0..table.records.len())
        .filter(|&i| filter.matches(table, &table.records[i]))
        .collect();

    if let Some(spec) = sort {
        sort_rows(table, &mut row_ix, spec);
    }

    View { row_ix, table }
}

fn sort_rows(table: &Table, row_ix: &mut Vec<usize>, spec: &SortSpec) {
    if table.date_col == Some(spec.column) {
        // Invalid dates are not orderable: they go last in original order,
        // whatever the direction.
        let (mut valid, invalid): (Vec<usize>, Vec<usize>) =
            row_ix.iter().partition(|&&ix| table.records[ix].date_valid);

        valid.sort_by(|&a, &b| {
            let da = table.records[a].parsed_date;
            let db = table.records[b].parsed_date;
            match spec.direction {
                Direction::Asc => da.cmp(&db),
                Direction::Desc => db.cmp(&da),
            }
        });

        valid.extend(invalid);
        *row_ix = valid;
    } else {
        let mut keyed: Vec<(String, usize)> = row_ix
            .iter()
            .map(|&ix| (table.records[ix].cell(spec.column).to_lowercase(), ix))
            .collect();
        keyed.sort_by(|(ka, _), (kb, _)| match spec.direction {
            Direction::Asc => ka.cmp(kb),
            Direction::Desc => kb.cmp(ka),
        });
        *row_ix = keyed.into_iter().map(|(_, ix)| ix).collect();
    }
}
