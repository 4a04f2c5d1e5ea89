// src/gui/components/tabs.rs
//
// Renders the top view tabs (Documents / Table) and performs the switch.
// Both views are derived from the same canonical feed + selection, so a
// switch needs no data reload.

use eframe::egui;
use crate::config::state::ViewMode;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let mut view = app.state.gui.view;
        if ui.selectable_label(view == ViewMode::Documents, "Documents").clicked() {
            view = ViewMode::Documents;
        }
        if ui.selectable_label(view == ViewMode::Table, "Table").clicked() {
            view = ViewMode::Table;
        }

        if view != app.state.gui.view {
            logf!("UI: View switch {:?} → {:?}", app.state.gui.view, view);
            app.state.gui.view = view;
        }
    });
}
