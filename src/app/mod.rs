mod run;
mod ui_state;

use std::path::PathBuf;

use crate::model::{AlertKey, AlertStore, BatterySnapshot, Thresholds};
use eframe::egui;

pub use run::run;
pub use ui_state::{AlertFilter, UiState};

pub struct VoltWatchApp {
    pub alerts: AlertStore,
    pub battery: Option<BatterySnapshot>,
    pub thresholds: Thresholds,
    pub title: String,
    pub feed_path: Option<PathBuf>,
    pub ui: UiState,
}

impl Default for VoltWatchApp {
    fn default() -> Self {
        Self {
            alerts: AlertStore::demo(),
            battery: None,
            thresholds: Thresholds::default(),
            title: "Active Alerts".to_string(),
            feed_path: None,
            ui: UiState::default(),
        }
    }
}

impl eframe::App for VoltWatchApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}

impl VoltWatchApp {
    pub fn load_feed(&mut self, path: PathBuf) -> anyhow::Result<()> {
        self.ui.last_error = None;
        let ingested = crate::ingest::feed::ingest(&path)?;
        tracing::info!(
            path = %path.display(),
            alerts = ingested.alerts.len(),
            "loaded alerts feed"
        );
        self.feed_path = Some(path);
        if let Some(title) = ingested.title {
            self.title = title;
        }
        self.battery = ingested.battery;
        if let Some(thresholds) = ingested.thresholds {
            self.thresholds = thresholds;
        }
        self.alerts = ingested.alerts;
        Ok(())
    }

    pub fn load_demo(&mut self) {
        self.ui.last_error = None;
        self.feed_path = None;
        self.battery = None;
        self.alerts = AlertStore::demo();
    }

    /// Caller side of the alerts panel's "Mark as Resolved" hook.
    pub fn resolve(&mut self, key: AlertKey) {
        if self.alerts.resolve(key) {
            tracing::info!(?key, "alert resolved");
        } else {
            tracing::warn!(?key, "resolve requested for missing alert");
        }
    }
}
