// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, ViewMode},
    feed::intel::Article,
    store::{self, Feed},
    view,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "PropWatch",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical feed data; loaded from cache at startup, replaced by FETCH
    pub feed: Feed,

    // selection anchor for shift-clicks in the article panel
    pub last_clicked: Option<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        let feed = match store::load_feed() {
            Ok(f) if !f.is_empty() => {
                logf!("Cache: Loaded feed (articles={})", f.article_count());
                status = s!("Loaded local data");
                f
            }
            Ok(_) => {
                logd!("Cache: feed is empty, skipping");
                Feed::default()
            }
            Err(e) => {
                logd!("Cache: Missing feed ({})", e);
                Feed::default()
            }
        };

        // Default selection: all
        state.gui.selected_articles = (0..feed.article_count()).collect();

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: articles={}, view={:?}", feed.article_count(), state.gui.view);

        Self {
            state,
            feed,
            last_clicked: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Borrow the articles currently selected in the left panel.
    pub fn selected_articles(&self) -> Vec<&Article> {
        view::selected(&self.feed, &self.state.gui.selected_articles)
    }

    pub fn select_all(&mut self) {
        self.state.gui.selected_articles = (0..self.feed.article_count()).collect();
    }

    #[inline]
    pub fn set_selection_message(&self) {
        let n = self.state.gui.selected_articles.len();
        self.status(format!("Selection: {} article(s)", n));
    }

    /// Replace the canonical feed after a successful fetch.
    pub fn adopt_feed(&mut self, feed: Feed) {
        self.feed = feed;
        self.last_clicked = None;
        self.select_all();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("articles")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::article_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            match self.state.gui.view {
                ViewMode::Documents => crate::gui::components::doc_view::draw(ui, self),
                ViewMode::Table => crate::gui::components::section_table::draw(ui, self),
            }
        });
    }
}
