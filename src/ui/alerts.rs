use crate::app::AlertFilter;
use crate::model::{Alert, AlertKey};
use eframe::egui;

/// What the alerts panel reported back to its caller this frame. The panel
/// never mutates the alert list itself; resolution is the caller's job.
#[derive(Default)]
pub struct AlertsPanelResponse {
    pub resolve_clicked: Option<AlertKey>,
    pub filter_changed: Option<AlertFilter>,
}

/// Indices of the alerts the current filter keeps, in input order.
pub fn filtered_indices(alerts: &[Alert], filter: AlertFilter) -> Vec<usize> {
    alerts
        .iter()
        .enumerate()
        .filter(|(_, a)| filter.matches(a))
        .map(|(i, _)| i)
        .collect()
}

/// Renders the alert list with its filter chips. An empty input renders the
/// "all systems normal" panel instead, without filter controls.
pub fn alerts_panel(
    ui: &mut egui::Ui,
    alerts: &[Alert],
    title: &str,
    filter: &mut AlertFilter,
) -> AlertsPanelResponse {
    let mut response = AlertsPanelResponse::default();

    if alerts.is_empty() {
        empty_state(ui, title);
        return response;
    }

    let filtered = filtered_indices(alerts, *filter);

    ui.horizontal(|ui| {
        ui.heading(format!("{title} ({})", filtered.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left layout, so chips go in reverse order.
            for chip in AlertFilter::CHIPS.iter().rev() {
                if ui.selectable_label(*filter == *chip, chip.label()).clicked() {
                    *filter = *chip;
                    response.filter_changed = Some(*chip);
                }
            }
        });
    });
    ui.separator();
    ui.add_space(6.0);

    // The chips above may have changed the filter this frame; recompute so
    // the list reflects the click immediately.
    let filtered = filtered_indices(alerts, *filter);

    if filtered.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.weak("No alerts match the current filter");
        });
        return response;
    }

    egui::ScrollArea::vertical()
        .id_source("alerts_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for &index in &filtered {
                let alert = &alerts[index];
                if let Some(key) = alert_card(ui, alert, alert.key(index)) {
                    response.resolve_clicked = Some(key);
                }
                ui.add_space(6.0);
            }
        });

    response
}

fn empty_state(ui: &mut egui::Ui, title: &str) {
    ui.heading(title);
    ui.separator();
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("✔")
                .size(36.0)
                .color(crate::ui::SUCCESS_COLOR),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("All systems normal")
                .strong()
                .color(crate::ui::SUCCESS_COLOR),
        );
        ui.weak("No active alerts or faults detected");
    });
}

/// One alert card. Returns the alert's key when "Mark as Resolved" was
/// clicked this frame.
fn alert_card(ui: &mut egui::Ui, alert: &Alert, key: AlertKey) -> Option<AlertKey> {
    let mut clicked = None;
    let accent = crate::ui::badge_color(&alert.severity, alert.resolved);

    ui.push_id(key, |ui| {
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .stroke(egui::Stroke::new(1.0, accent))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(crate::ui::badge_glyph(
                            &alert.severity,
                            alert.resolved,
                        ))
                        .color(accent),
                    );
                    ui.label(egui::RichText::new(&alert.kind).strong());
                    ui.label(
                        egui::RichText::new(alert.badge_text())
                            .small()
                            .color(accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(crate::ui::kind_glyph(&alert.kind)).size(20.0),
                        );
                    });
                });

                ui.add_space(2.0);
                ui.label(&alert.message);
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.weak(egui::RichText::new(&alert.timestamp).small());
                    if !alert.resolved {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("Mark as Resolved").clicked() {
                                    clicked = Some(key);
                                }
                            },
                        );
                    }
                });
            });
    });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn alert(severity: Severity, resolved: bool) -> Alert {
        Alert {
            id: None,
            kind: "Overheat".into(),
            severity,
            resolved,
            message: "Cell temp 85C".into(),
            timestamp: "12:00".into(),
        }
    }

    #[test]
    fn all_keeps_every_alert() {
        let alerts = vec![
            alert(Severity::High, false),
            alert(Severity::Medium, true),
            alert(Severity::Other("Unknown".into()), false),
        ];
        assert_eq!(
            filtered_indices(&alerts, AlertFilter::All),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn high_filter_drops_resolved_high() {
        let alerts = vec![alert(Severity::High, true)];
        assert!(filtered_indices(&alerts, AlertFilter::High).is_empty());
    }

    #[test]
    fn filtering_preserves_input_order() {
        let alerts = vec![
            alert(Severity::Medium, false),
            alert(Severity::High, false),
            alert(Severity::High, false),
        ];
        assert_eq!(filtered_indices(&alerts, AlertFilter::High), vec![1, 2]);
    }

    #[test]
    fn filtering_is_idempotent_and_pure() {
        let alerts = vec![
            alert(Severity::High, false),
            alert(Severity::Low, true),
        ];
        let once = filtered_indices(&alerts, AlertFilter::Resolved);
        let twice = filtered_indices(&alerts, AlertFilter::Resolved);
        assert_eq!(once, twice);
        assert!(!alerts[0].resolved);
        assert!(alerts[1].resolved);
    }
}
