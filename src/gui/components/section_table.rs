// src/gui/components/section_table.rs
//
// Flat table view over the selected articles: one row per parsed section,
// same shape as the export rows.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, view};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let articles = app.selected_articles();
    let rows = view::section_rows(&articles);
    let headers = view::section_headers();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("section_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .column(Column::initial(220.0).resizable(true).clip(true).at_least(60.0))
                .column(Column::initial(120.0).resizable(true).clip(true).at_least(40.0))
                .column(Column::initial(140.0).resizable(true).clip(true).at_least(40.0))
                .column(Column::remainder().clip(true).at_least(80.0))
                .header(24.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let row_idx = row.index();
                        if let Some(data) = rows.get(row_idx) {
                            for cell in data {
                                row.col(|ui| {
                                    ui.scope(|ui| {
                                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                        ui.label(cell);
                                    });
                                });
                            }
                        }
                    });
                });
        });
}
