use crate::app::VoltWatchApp;
use crate::model::{Range, Severity};
use eframe::egui;

pub fn battery_panel(ui: &mut egui::Ui, app: &mut VoltWatchApp) {
    ui.heading("Battery");
    ui.add_space(6.0);

    severity_counts(ui, app);
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    let Some(snapshot) = app.battery.clone() else {
        ui.weak("Load an alerts feed to see telemetry.");
        return;
    };

    let t = app.thresholds;
    egui::Grid::new("telemetry_grid")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            reading(ui, "Voltage", format!("{:.1} V", snapshot.voltage), snapshot.voltage, &t.voltage);
            reading(ui, "Current", format!("{:.1} A", snapshot.current), snapshot.current, &t.current);
            reading(
                ui,
                "Temperature",
                format!("{:.1} °C", snapshot.temperature),
                snapshot.temperature,
                &t.temperature,
            );
            reading(ui, "SOC", format!("{:.1} %", snapshot.soc), snapshot.soc, &t.soc);
            reading(ui, "SOH", format!("{:.1} %", snapshot.soh), snapshot.soh, &t.soh);
        });

    if !snapshot.timestamp.is_empty() {
        ui.add_space(6.0);
        ui.weak(egui::RichText::new(&snapshot.timestamp).small());
    }

    if !snapshot.fault_flags.is_empty() {
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Fault register").strong());
        for flag in &snapshot.fault_flags {
            ui.colored_label(
                crate::ui::badge_color(&Severity::High, false),
                format!("0x{:02X}  {}", flag.code, flag.description),
            );
        }
    }
}

fn severity_counts(ui: &mut egui::Ui, app: &VoltWatchApp) {
    if app.alerts.is_empty() {
        ui.weak("No alerts loaded.");
        return;
    }

    let mut high = 0usize;
    let mut medium = 0usize;
    let mut low = 0usize;
    let mut resolved = 0usize;
    for alert in app.alerts.iter() {
        if alert.resolved {
            resolved += 1;
            continue;
        }
        match alert.severity {
            Severity::High => high += 1,
            Severity::Medium => medium += 1,
            _ => low += 1,
        }
    }

    ui.horizontal_wrapped(|ui| {
        ui.label(format!("Total {}", app.alerts.len()));
        ui.colored_label(
            crate::ui::badge_color(&Severity::High, false),
            format!("High {high}"),
        );
        ui.colored_label(
            crate::ui::badge_color(&Severity::Medium, false),
            format!("Med {medium}"),
        );
        ui.colored_label(
            crate::ui::badge_color(&Severity::Low, false),
            format!("Low {low}"),
        );
        ui.colored_label(
            crate::ui::badge_color(&Severity::Low, true),
            format!("Resolved {resolved}"),
        );
    });
}

fn reading(ui: &mut egui::Ui, name: &str, text: String, value: f64, range: &Range) {
    ui.label(name);
    if range.contains(value) {
        ui.monospace(text);
    } else {
        ui.monospace(
            egui::RichText::new(text).color(crate::ui::badge_color(&Severity::High, false)),
        )
        .on_hover_text(format!("outside {:.1}..{:.1}", range.min, range.max));
    }
    ui.end_row();
}
