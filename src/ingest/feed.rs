use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Alert, AlertId, AlertStore, BatterySnapshot, Severity, Thresholds};

pub struct IngestedFeed {
    pub title: Option<String>,
    pub alerts: AlertStore,
    pub battery: Option<BatterySnapshot>,
    pub thresholds: Option<Thresholds>,
}

/// A feed file is either a full monitor export (`/api/battery` payload) or a
/// bare array of alert records.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeedFile {
    Document(FeedDocument),
    List(Vec<AlertRecord>),
}

#[derive(Deserialize)]
struct FeedDocument {
    title: Option<String>,
    #[serde(alias = "battery")]
    data: Option<BatterySnapshot>,
    #[serde(default)]
    alerts: Vec<AlertRecord>,
    thresholds: Option<Thresholds>,
}

/// Tolerant alert record. Dashboard exports carry `type`/`severity`; the
/// monitor's raw threshold alerts carry `parameter`/`value`/`threshold`
/// instead. Every field is optional so a partial record still renders.
#[derive(Deserialize)]
struct AlertRecord {
    id: Option<u64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    severity: Option<String>,
    #[serde(default)]
    resolved: bool,
    message: Option<String>,
    timestamp: Option<String>,

    parameter: Option<String>,
    value: Option<f64>,
    threshold: Option<f64>,
}

impl AlertRecord {
    fn into_alert(self) -> Alert {
        // Raw monitor shape: classify by parameter and breach direction.
        let kind = match (&self.parameter, self.kind) {
            (Some(parameter), _) => {
                let above = match (self.value, self.threshold) {
                    (Some(v), Some(t)) => v > t,
                    _ => true,
                };
                crate::ingest::telemetry::kind_for_breach(parameter, above).to_string()
            }
            (None, Some(kind)) => kind,
            (None, None) => "Fault".to_string(),
        };

        let severity = match self.severity {
            Some(s) => Severity::parse(&s),
            // The monitor tags its threshold alerts as warnings.
            None => Severity::Medium,
        };

        Alert {
            id: self.id.map(AlertId),
            kind,
            severity,
            resolved: self.resolved,
            message: self.message.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
        }
    }
}

pub fn ingest(path: &Path) -> Result<IngestedFeed> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_feed(&text).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_feed(text: &str) -> Result<IngestedFeed> {
    let file: FeedFile = serde_json::from_str(text).context("parse alerts feed JSON")?;

    let doc = match file {
        FeedFile::Document(doc) => doc,
        FeedFile::List(alerts) => FeedDocument {
            title: None,
            data: None,
            alerts,
            thresholds: None,
        },
    };

    let mut alerts: Vec<Alert> = doc.alerts.into_iter().map(AlertRecord::into_alert).collect();

    // Telemetry-derived alerts come after the feed's own.
    if let Some(battery) = &doc.data {
        let thresholds = doc.thresholds.unwrap_or_default();
        alerts.extend(crate::ingest::telemetry::evaluate(battery, &thresholds));
        alerts.extend(crate::ingest::telemetry::decode_fault_flags(
            &battery.fault_flags,
        ));
    }

    Ok(IngestedFeed {
        title: doc.title,
        alerts: AlertStore::from_alerts(alerts),
        battery: doc.data,
        thresholds: doc.thresholds,
    })
}
