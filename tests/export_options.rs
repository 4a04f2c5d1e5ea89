// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use std::path::PathBuf;

use propwatch::config::options::{ExportFormat, ExportOptions, ExportType};

#[test]
fn default_path_extension_follows_format() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.export_type = ExportType::SingleFile;
    assert!(opts.out_path().to_string_lossy().ends_with("sections.csv"));

    // Switch format → extension reflects it
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("sections.tsv"));
}

#[test]
fn user_dir_and_stem_are_kept() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.set_path("exports/intel");

    let expected: PathBuf = ["exports", "intel.csv"].iter().collect();
    assert_eq!(opts.out_path(), expected);
}

#[test]
fn pasted_extension_is_ignored() {
    // The selected format controls the extension, not the pasted text
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path("out/custom.data");
    assert!(opts.out_path().to_string_lossy().ends_with("custom.tsv"));
}

#[test]
fn per_source_path_is_a_directory() {
    let mut opts = ExportOptions::default();
    opts.export_type = ExportType::PerSource;
    opts.set_path("out/sources");

    let expected: PathBuf = ["out", "sources"].iter().collect();
    assert_eq!(opts.out_path(), expected);
}

#[test]
fn delim_matches_format() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    assert_eq!(opts.delim(), ',');
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.delim(), '\t');
}
