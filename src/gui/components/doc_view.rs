// src/gui/components/doc_view.rs
//
// Document view: one block per selected article — title, meta line, link,
// then a two-column label/content grid of its parsed sections. Articles
// whose analysis parses to nothing get the literal no-summary indicator.

use eframe::egui::{self, RichText};

use crate::config::consts::NO_SUMMARY;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let articles = app.selected_articles();

    let avail_h = ui.available_height();
    egui::ScrollArea::vertical()
        .id_salt("doc_view_scroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            if articles.is_empty() {
                ui.label("No articles selected.");
                return;
            }

            for (i, a) in articles.iter().enumerate() {
                if i > 0 { ui.separator(); }

                ui.heading(&a.title);

                let mut meta = Vec::new();
                if let Some(src) = &a.source { meta.push(format!("Source: {src}")); }
                if let Some(date) = &a.published { meta.push(format!("Published: {date}")); }
                if let Some(by) = &a.author { meta.push(format!("By {by}")); }
                if !meta.is_empty() {
                    ui.label(meta.join("  |  "));
                }
                if let Some(url) = a.href() {
                    ui.hyperlink_to("Read more", url);
                }

                let secs = a.sections();
                if secs.is_empty() {
                    ui.label(RichText::new(NO_SUMMARY).italics());
                    continue;
                }

                egui::Grid::new(("sections", i))
                    .num_columns(2)
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for sec in &secs {
                            ui.label(RichText::new(&sec.label).strong());
                            ui.label(&sec.content);
                            ui.end_row();
                        }
                    });
            }
        });
}
