// src/file.rs

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::options::ExportOptions;
use crate::csv;
use crate::query::View;

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the current filtered/sorted view, all of it, independent of
/// pagination. Returns the final path written to.
pub fn export_view(
    export: &ExportOptions,
    tab_id: &str,
    view: &View,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path(tab_id);
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let contents = csv::to_export_string(
        view.header(),
        &view.rows_owned(),
        export.include_headers,
        export.format.delim(),
    );

    fs::write(&path, contents)?;
    logf!("Export: wrote {} rows to {}", view.len(), path.display());
    Ok(path)
}
