// src/gui/actions.rs
//
// Button handlers for the action bar: copy, export, fetch.
// Each reads the current selection through `view` and reports through the
// shared status line.

use eframe::egui;

use crate::{
    config::options::ExportType,
    csv, fetch, file,
    gui::app::App,
    gui::progress::GuiProgress,
    view,
};

pub fn copy(app: &mut App, ctx: &egui::Context) {
    let articles = app.selected_articles();
    if articles.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let headers = Some(view::section_headers());
    let rows = view::section_rows(&articles);

    logf!("Copy: rows={}, articles={}", rows.len(), articles.len());

    let export = &app.state.options.export;
    let txt = csv::to_export_string(&headers, &rows, export.include_headers, export.delim());
    ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    let (headers, rows) = {
        let articles = app.selected_articles();
        if articles.is_empty() {
            app.status("Nothing to export");
            logd!("Export: Clicked, but there's nothing to export");
            return;
        }
        (Some(view::section_headers()), view::section_rows(&articles))
    };

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    let export = &app.state.options.export;

    logf!(
        "Export: Begin rows={}, type={:?}, format={:?}",
        rows.len(),
        export.export_type,
        export.format
    );

    let res: Result<Vec<std::path::PathBuf>, Box<dyn std::error::Error>> =
        match export.export_type {
            ExportType::SingleFile => {
                file::write_export_single(export, &headers, &rows).map(|p| vec![p])
            }
            ExportType::PerSource => file::write_export_per_source(export, &headers, &rows, 1),
        };

    match res {
        Ok(paths) => {
            if let Some(last) = paths.last() {
                logf!("Export: OK count={} last={}", paths.len(), last.display());
                app.status(format!("Exported {} file(s). Last: {}", paths.len(), last.display()));
            } else {
                logf!("Export: OK count=0");
                app.status("Export done");
            }
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn fetch(app: &mut App) {
    let opts = app.state.options.fetch.clone();
    logf!("Fetch: Begin {}:{}{}", opts.host, opts.port, opts.path);

    let mut prog = GuiProgress::new(app.status.clone());

    match fetch::collect_intel(&opts, Some(&mut prog)) {
        Ok(feed) => {
            logf!("Fetch: OK articles={}", feed.article_count());
            app.adopt_feed(feed);
            app.status("Ready");
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
