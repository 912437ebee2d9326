mod alerts;
mod battery;

use crate::app::VoltWatchApp;
use crate::model::Severity;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut VoltWatchApp) {
    top_bar(ctx, frame, app);

    egui::SidePanel::left("battery_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| battery::battery_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| {
        let title = app.title.clone();
        let response = alerts::alerts_panel(ui, app.alerts.as_slice(), &title, &mut app.ui.filter);
        if let Some(filter) = response.filter_changed {
            tracing::debug!(filter = filter.label(), "filter changed");
        }
        if let Some(key) = response.resolve_clicked {
            app.resolve(key);
        }
    });

    about_window(ctx, app);
    status_bar(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut VoltWatchApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open alerts feed...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Alerts feed", &["json"])
                        .pick_file()
                    {
                        if let Err(e) = app.load_feed(path) {
                            app.ui.last_error = Some(e.to_string());
                        }
                    }
                }
                if ui.button("Load demo data").clicked() {
                    ui.close_menu();
                    app.load_demo();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn about_window(ctx: &egui::Context, app: &mut VoltWatchApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About VoltWatch")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("EV battery alert dashboard.");
            ui.label("Feed a monitor export (File > Open alerts feed...) or use the demo data.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut VoltWatchApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Alerts: {}", app.alerts.len()));
            ui.separator();
            ui.label(format!("Active: {}", app.alerts.active_count()));
            if let Some(p) = &app.feed_path {
                ui.separator();
                let name = p
                    .file_name()
                    .map(|s| s.to_string_lossy())
                    .unwrap_or_else(|| p.to_string_lossy());
                ui.label(format!("Feed: {name}"));
            }
            if let Some(err) = &app.ui.last_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(255, 70, 70),
                    format!("Error: {err}"),
                );
            }
        });
    });
}

/// Badge color table. Resolved wins over severity; unrecognized severities
/// get the neutral treatment rather than an error.
pub fn badge_color(severity: &Severity, resolved: bool) -> egui::Color32 {
    if resolved {
        return egui::Color32::from_rgb(150, 150, 150);
    }
    match severity {
        Severity::High => egui::Color32::from_rgb(255, 70, 70),
        Severity::Medium => egui::Color32::from_rgb(255, 170, 0),
        Severity::Low => egui::Color32::from_rgb(90, 160, 255),
        Severity::Other(_) => egui::Color32::from_rgb(150, 150, 150),
    }
}

/// Badge glyph, same resolved-first switch as the color.
pub fn badge_glyph(severity: &Severity, resolved: bool) -> &'static str {
    if resolved {
        return "✔";
    }
    match severity {
        Severity::High => "❗",
        Severity::Medium => "⚠",
        _ => "ℹ",
    }
}

/// Decorative glyph on the right of each card, selected by exact match on
/// the alert category.
pub fn kind_glyph(kind: &str) -> &'static str {
    match kind {
        "Overheat" | "Overtemperature" => "🔥",
        "Overvoltage" | "Undervoltage" => "⚡",
        "Short Circuit" => "💥",
        _ => "ℹ",
    }
}

pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 200, 120);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_overrides_severity_for_color_and_glyph() {
        let gray = badge_color(&Severity::High, true);
        assert_eq!(gray, badge_color(&Severity::Other("x".into()), false));
        assert_eq!(badge_glyph(&Severity::High, true), "✔");
    }

    #[test]
    fn severity_colors_are_distinct_when_unresolved() {
        let high = badge_color(&Severity::High, false);
        let medium = badge_color(&Severity::Medium, false);
        let low = badge_color(&Severity::Low, false);
        assert_ne!(high, medium);
        assert_ne!(medium, low);
        assert_ne!(high, low);
    }

    #[test]
    fn unknown_kind_gets_generic_glyph() {
        assert_eq!(kind_glyph("Overheat"), "🔥");
        assert_eq!(kind_glyph("Overvoltage"), kind_glyph("Undervoltage"));
        assert_eq!(kind_glyph("Gremlins"), "ℹ");
        // Exact match only.
        assert_eq!(kind_glyph("overheat"), "ℹ");
    }
}
