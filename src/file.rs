// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_source_filename;
use crate::csv::to_export_string;

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, export.include_headers, export.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write one file per feed source into the directory implied by
/// `export.out_path()` (a directory when `export.export_type == PerSource`).
/// `source_col` is the column index of the "Source" field in `rows`.
pub fn write_export_per_source(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    source_col: usize,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    // Group rows by source name from the given column
    let mut by_source: HashMap<String, Vec<Vec<String>>> = HashMap::new();
    for r in rows {
        if let Some(source) = r.get(source_col) {
            by_source.entry(source.clone()).or_default().push(r.clone());
        }
    }

    // Dedup stems and write each file
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(by_source.len());
    let ext = export.format.ext();

    for (source_name, source_rows) in by_source {
        let base_stem = sanitize_source_filename(&source_name);
        let path = resolve_source_filename(&outdir, &base_stem, &mut seen, ext);

        let contents =
            to_export_string(headers, &source_rows, export.include_headers, export.delim());
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Duplicate handling **only within this run**
pub fn resolve_source_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
