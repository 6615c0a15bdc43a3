// src/cli.rs
use std::env;

use chrono::NaiveDate;

use crate::config::consts::{self, TabSpec, TABS};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::config::settings;
use crate::core::net;
use crate::csv::{self, Delim};
use crate::paging;
use crate::progress::Progress;
use crate::query::{self, Direction, Filter, SortSpec};
use crate::session::{FetchOutcome, TabSession};
use crate::sources;
use crate::store::{self, Table};
use crate::{aggregate, file};

pub struct Params {
    pub scrape: bool,
    pub fetch: bool,
    pub list_tabs: bool,
    pub toggle_theme: bool,
    pub tab: String,
    pub keyword: String,
    pub county: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sort: Option<String>,
    pub desc: bool,
    /// 1-based page number from the flag; 0-based internally.
    pub page: usize,
    pub export: bool,
    pub out: Option<String>,
    pub format: ExportFormat,
    pub no_headers: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            scrape: false,
            fetch: false,
            list_tabs: false,
            toggle_theme: false,
            tab: consts::MASTER_TAB_ID.to_string(),
            keyword: String::new(),
            county: None,
            from: None,
            to: None,
            sort: None,
            desc: false,
            page: 1,
            export: false,
            out: None,
            format: ExportFormat::Csv,
            no_headers: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    if params.list_tabs {
        for tab in &TABS {
            println!("{}\t{}", tab.id, tab.label);
        }
        return Ok(());
    }

    if params.toggle_theme {
        let mut cfg = settings::load();
        cfg.theme = cfg.theme.flip();
        settings::save(&cfg);
        println!("Theme: {}", cfg.theme.as_str());
        return Ok(());
    }

    if params.scrape {
        let sources = sources::registry();
        let mut prog = CliProgress;
        let table = aggregate::run(&sources, &mut prog)?;
        println!("Aggregated {} unique records into tab '{}'.", table.len(), consts::MASTER_TAB_ID);
        return Ok(());
    }

    query_mode(&params)
}

fn query_mode(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let tab = consts::find_tab(&params.tab)
        .ok_or_else(|| format!("Unknown tab: {} (see --list-tabs)", params.tab))?;

    let mut session = TabSession::new();
    session.set_filter(Filter {
        keyword: params.keyword.clone(),
        county: params.county.clone(),
        date_from: params.from,
        date_to: params.to,
    });
    session.set_page(params.page.saturating_sub(1));

    let generation = session.begin_fetch();
    let result = if params.fetch { fetch_tab(tab) } else { store::load_tab(tab.id) };
    let fetch_error = result.as_ref().err().map(ToString::to_string);
    if session.complete_fetch(generation, result) == FetchOutcome::Failed {
        let error = fetch_error.unwrap_or_else(|| "unknown error".to_string());
        // A failed refresh falls back to whatever the last run cached.
        if params.fetch {
            let generation = session.begin_fetch();
            session.complete_fetch(generation, store::load_tab(tab.id));
        }
        let notice = fetch_failure_notice(&error, session.table().is_some())?;
        eprintln!("{notice}");
    }
    // complete_fetch resets the page on a swap; restore the requested one.
    session.set_page(params.page.saturating_sub(1));

    if let Some(name) = &params.sort {
        let column = session
            .table()
            .and_then(|t| t.col_index(name))
            .ok_or_else(|| format!("Unknown sort column: {name}"))?;
        let direction = if params.desc { Direction::Desc } else { Direction::Asc };
        session.sort = Some(SortSpec { column, direction });
    }

    let table = session
        .table()
        .ok_or("No data for this tab. Run with --fetch or --scrape first.")?;
    let view = query::apply(table, &session.filter, session.sort.as_ref());

    if params.export {
        let cfg = settings::load();
        let mut export = ExportOptions::default();
        export.format = params.format;
        export.include_headers = cfg.include_headers && !params.no_headers;
        if let Some(out) = &params.out {
            export.set_path(out);
        }
        let path = file::export_view(&export, tab.id, &view)?;
        println!("Wrote {} rows to {}", view.len(), path.display());
        return Ok(());
    }

    if view.is_empty() {
        println!("No matching rows.");
        return Ok(());
    }

    let page = paging::paginate(&view, session.page_index);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    csv::write_row(&mut out, view.header(), Delim::Csv)?;
    for i in page.start..page.end {
        if let Some(rec) = view.record(i) {
            csv::write_row(&mut out, &rec.cells, Delim::Csv)?;
        }
    }
    let (lo, hi) = page.display_range();
    println!(
        "Page {} of {} (rows {}-{} of {})",
        page.page_index + 1,
        page.total_pages,
        lo,
        hi,
        view.len()
    );
    Ok(())
}

/// What a failed fetch means for the user: with cached data to show it is
/// a notice and the run continues, without any it is the run's result.
pub fn fetch_failure_notice(
    error: &str,
    have_cached: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    if have_cached {
        Ok(format!("Fetch failed ({error}); showing previously cached data."))
    } else {
        Err(format!("Fetch failed: {error}").into())
    }
}

fn fetch_tab(tab: &TabSpec) -> Result<Table, Box<dyn std::error::Error>> {
    let text = net::http_get(consts::SHEET_HOST, &consts::feed_path(tab))?;
    store::save_tab_text(tab.id, &text)?;
    Ok(Table::from_csv_text(&text))
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        println!("Scraping {} sources...", total);
    }
    fn log(&mut self, msg: &str) {
        println!("  {}", msg);
    }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--scrape" => params.scrape = true,
            "--fetch" => params.fetch = true,
            "--list-tabs" => params.list_tabs = true,
            "--toggle-theme" => params.toggle_theme = true,
            "--tab" => params.tab = args.next().ok_or("Missing value for --tab")?,
            "-k" | "--keyword" => {
                params.keyword = args.next().ok_or("Missing value for --keyword")?;
            }
            "--county" => params.county = Some(args.next().ok_or("Missing value for --county")?),
            "--from" => params.from = Some(parse_date_arg(&args.next().ok_or("Missing value for --from")?)?),
            "--to" => params.to = Some(parse_date_arg(&args.next().ok_or("Missing value for --to")?)?),
            "--sort" => params.sort = Some(args.next().ok_or("Missing value for --sort")?),
            "--desc" => params.desc = true,
            "--page" => {
                let v: usize = args.next().ok_or("Missing value for --page")?.parse()?;
                if v == 0 {
                    return Err("Page numbers start at 1".into());
                }
                params.page = v;
            }
            "--export" => params.export = true,
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.no_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    crate::record::parse_date(s).ok_or_else(|| format!("Unrecognized date: {}", s).into())
}
