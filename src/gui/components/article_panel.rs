// src/gui/components/article_panel.rs
//
// Renders the left article list and applies selection changes directly to
// `app`. Handles ctrl/shift range behavior and the status text.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Articles");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.select_all();
            app.set_selection_message();
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_articles.clear();
            app.set_selection_message();
        }
    });

    ui.separator();

    // Match the scroll bar aesthetics used in the table view
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("article_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);

            let mut changed = false;

            for idx in 0..app.feed.article_count() {
                let is_selected = app.state.gui.selected_articles.contains(&idx);
                let resp = ui.selectable_label(is_selected, &app.feed.articles[idx].title);

                if resp.clicked() {
                    let input = ui.input(|i| i.clone());
                    let sel = &mut app.state.gui.selected_articles;

                    if input.modifiers.ctrl {
                        if is_selected { sel.retain(|&x| x != idx); } else { sel.push(idx); }
                        app.last_clicked = Some(idx);
                    } else if input.modifiers.shift {
                        if let Some(last) = app.last_clicked {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            sel.clear();
                            for j in lo..=hi { sel.push(j); }
                        } else {
                            // No anchor: behave like single click
                            sel.clear();
                            sel.push(idx);
                            app.last_clicked = Some(idx);
                        }
                    } else {
                        sel.clear();
                        sel.push(idx);
                        app.last_clicked = Some(idx);
                    }
                    changed = true;
                }
            }

            if changed {
                app.set_selection_message();
                logf!(
                    "UI: Selection changed ({} articles) — {:?}",
                    app.state.gui.selected_articles.len(),
                    &app.state.gui.selected_articles
                );
            }
        });
}
