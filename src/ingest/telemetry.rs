//! Derives dashboard alerts from raw battery telemetry: threshold breaches
//! and BMS fault register bits, mirroring the monitor server's checks.

use crate::model::{Alert, BatterySnapshot, FaultFlag, Range, Severity, Thresholds};

/// Alert category for a parameter that left its threshold range.
pub fn kind_for_breach(parameter: &str, above: bool) -> &'static str {
    match (parameter, above) {
        ("voltage", true) => "Overvoltage",
        ("voltage", false) => "Undervoltage",
        ("current", _) => "Overcurrent",
        ("temperature", true) => "Overheat",
        ("temperature", false) => "Undertemperature",
        ("soc", false) => "SOC Low",
        ("soh", false) => "SOH Low",
        _ => "Fault",
    }
}

fn severity_for_fault(code: u8) -> Severity {
    match code {
        // Undertemperature and degradation flags are advisory.
        0x10 | 0x20 | 0x40 => Severity::Medium,
        _ => Severity::High,
    }
}

fn breach(parameter: &str, value: f64, range: &Range, timestamp: &str) -> Option<Alert> {
    let (above, limit) = if value > range.max {
        (true, range.max)
    } else if value < range.min {
        (false, range.min)
    } else {
        return None;
    };

    let direction = if above {
        "above maximum"
    } else {
        "below minimum"
    };
    Some(Alert {
        id: None,
        kind: kind_for_breach(parameter, above).to_string(),
        severity: Severity::Medium,
        resolved: false,
        message: format!(
            "{} {} threshold ({:.1} vs limit {:.1})",
            parameter.to_uppercase(),
            direction,
            value,
            limit
        ),
        timestamp: timestamp.to_string(),
    })
}

/// The server's `check_alerts` pass: one Medium alert per parameter outside
/// its range.
pub fn evaluate(snapshot: &BatterySnapshot, thresholds: &Thresholds) -> Vec<Alert> {
    let ts = if snapshot.timestamp.is_empty() {
        crate::util::time::now_utc_string()
    } else {
        snapshot.timestamp.clone()
    };

    let params: [(&str, f64, &Range); 5] = [
        ("voltage", snapshot.voltage, &thresholds.voltage),
        ("current", snapshot.current, &thresholds.current),
        ("temperature", snapshot.temperature, &thresholds.temperature),
        ("soc", snapshot.soc, &thresholds.soc),
        ("soh", snapshot.soh, &thresholds.soh),
    ];

    params
        .iter()
        .filter_map(|(name, value, range)| breach(name, *value, range, &ts))
        .collect()
}

/// One alert per reported fault register bit. Unknown bits keep the reported
/// description as their category.
pub fn decode_fault_flags(flags: &[FaultFlag]) -> Vec<Alert> {
    flags
        .iter()
        .map(|flag| {
            let kind = match FaultFlag::name(flag.code) {
                Some(name) => name.to_string(),
                None if !flag.description.is_empty() => flag.description.clone(),
                None => "Fault".to_string(),
            };
            let timestamp = if flag.timestamp.is_empty() {
                crate::util::time::now_utc_string()
            } else {
                flag.timestamp.clone()
            };
            Alert {
                id: None,
                severity: severity_for_fault(flag.code),
                resolved: false,
                message: format!("BMS fault register bit 0x{:02X}: {}", flag.code, kind),
                kind,
                timestamp,
            }
        })
        .collect()
}
