// src/gui/components/action_bar.rs

use eframe::egui;
use crate::{
    config::options::{
        ExportFormat,
        ExportType::{PerSource, SingleFile},
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    }

    let export = &mut app.state.options.export;

    // --- Per-source toggle + Output field ---
    ui.horizontal(|ui| {
        let mut single = matches!(export.export_type, SingleFile);
        if ui.checkbox(&mut single, "All sources in one file").changed() {
            export.export_type = if single { SingleFile } else { PerSource };
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            logf!("UI: export_type → {:?}", export.export_type);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / FETCH) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("FETCH").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            actions::fetch(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}
