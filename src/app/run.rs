use std::path::PathBuf;

use crate::app::{AlertFilter, VoltWatchApp};
use eframe::egui;

pub fn run(feed: Option<PathBuf>, filter: Option<AlertFilter>) -> eframe::Result<()> {
    let mut app = VoltWatchApp::default();

    if let Some(path) = feed {
        if let Err(e) = app.load_feed(path) {
            tracing::warn!(error = %e, "could not load feed from command line");
            app.ui.last_error = Some(e.to_string());
        }
    }
    if let Some(filter) = filter {
        app.ui.filter = filter;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("VoltWatch")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "VoltWatch",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
}
