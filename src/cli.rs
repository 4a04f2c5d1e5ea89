// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    config::options::{AppOptions, ExportFormat, ExportType},
    fetch, file,
    progress::Progress,
    store, view,
};

pub struct CliParams {
    pub options: AppOptions,
    pub cached: bool,
    pub list: bool,
    pub out: Option<PathBuf>,
}

impl CliParams {
    fn new() -> Self {
        Self {
            options: AppOptions::default(),
            cached: false,
            list: false,
            out: None,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = CliParams::new();
    parse_cli(&mut params)?;

    let feed = if params.cached {
        store::load_feed()
            .map_err(|e| format!("No usable cached feed ({e}); run without --cached first"))?
    } else {
        let mut prog = StderrProgress;
        fetch::collect_intel(&params.options.fetch, Some(&mut prog))?
    };

    if params.list {
        for a in &feed.articles {
            println!("{} ({} sections)", a.title, a.sections().len());
        }
        return Ok(());
    }

    let all: Vec<usize> = (0..feed.article_count()).collect();
    let articles = view::selected(&feed, &all);

    if let Some(out) = &params.out {
        let export = &mut params.options.export;

        // "-o out/" with a single-file export means "default filename in there"
        let out = if matches!(export.export_type, ExportType::SingleFile)
            && file::looks_like_dir_hint(out)
        {
            out.join(crate::config::consts::DEFAULT_FILE)
        } else {
            out.clone()
        };
        export.set_path(out.to_string_lossy().as_ref());

        let headers = Some(view::section_headers());
        let rows = view::section_rows(&articles);

        let written = match export.export_type {
            ExportType::SingleFile => file::write_export_single(export, &headers, &rows)
                .map(|p| vec![p])?,
            ExportType::PerSource => file::write_export_per_source(export, &headers, &rows, 1)?,
        };
        for p in &written {
            eprintln!("Wrote {}", p.display());
        }
    } else {
        print!("{}", view::document_text(&articles));
    }

    Ok(())
}

fn parse_cli(params: &mut CliParams) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--host" => params.options.fetch.host = args.next().ok_or("Missing value for --host")?,
            "--port" => {
                let v = args.next().ok_or("Missing value for --port")?;
                params.options.fetch.port = v.parse()?; }
            "--path" => {
                let v = args.next().ok_or("Missing value for --path")?;
                if !v.starts_with('/') { return Err(format!("Path must start with '/': {}", v).into()); }
                params.options.fetch.path = v; }
            "--cached" => params.cached = true,
            "--list" => params.list = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--per-source" => params.options.export.export_type = ExportType::PerSource,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.options.export.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/* ---------- Progress adapter ---------- */

struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, articles: usize) {
        eprintln!("Fetched {articles} article(s)");
    }
}
