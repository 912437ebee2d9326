use serde::Deserialize;

/// One telemetry sample from the battery monitor, as exported by its
/// `/api/battery` endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BatterySnapshot {
    pub voltage: f64,
    pub current: f64,
    pub temperature: f64,
    pub soc: f64,
    pub soh: f64,
    #[serde(default)]
    pub fault_flags: Vec<FaultFlag>,
    #[serde(default)]
    pub timestamp: String,
}

/// BMS fault flag as reported by the monitor. `code` is a single bit of the
/// fault register.
#[derive(Clone, Debug, Deserialize)]
pub struct FaultFlag {
    pub code: u8,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: String,
}

impl FaultFlag {
    /// Canonical name for a fault register bit. Unknown bits get no name and
    /// the caller falls back to the reported description.
    pub fn name(code: u8) -> Option<&'static str> {
        match code {
            0x01 => Some("Overvoltage"),
            0x02 => Some("Undervoltage"),
            0x04 => Some("Overcurrent"),
            0x08 => Some("Overtemperature"),
            0x10 => Some("Undertemperature"),
            0x20 => Some("SOC Low"),
            0x40 => Some("SOH Low"),
            0x80 => Some("Communication Error"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Alert thresholds per telemetry parameter. Defaults mirror the monitor
/// server's configuration.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub voltage: Range,
    pub current: Range,
    pub temperature: Range,
    pub soc: Range,
    pub soh: Range,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            voltage: Range {
                min: 42.0,
                max: 54.0,
            },
            current: Range {
                min: -20.0,
                max: 20.0,
            },
            temperature: Range {
                min: 0.0,
                max: 45.0,
            },
            soc: Range {
                min: 20.0,
                max: 100.0,
            },
            soh: Range {
                min: 80.0,
                max: 100.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_flag_names_cover_register_bits() {
        for code in [0x01u8, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80] {
            assert!(FaultFlag::name(code).is_some(), "bit 0x{code:02X} unnamed");
        }
        assert_eq!(FaultFlag::name(0x03), None);
    }

    #[test]
    fn range_contains_is_inclusive() {
        let r = Range {
            min: 42.0,
            max: 54.0,
        };
        assert!(r.contains(42.0));
        assert!(r.contains(54.0));
        assert!(!r.contains(54.1));
    }

    #[test]
    fn default_thresholds_match_monitor_config() {
        let t = Thresholds::default();
        assert_eq!(t.voltage.min, 42.0);
        assert_eq!(t.voltage.max, 54.0);
        assert_eq!(t.temperature.max, 45.0);
        assert_eq!(t.soc.min, 20.0);
        assert_eq!(t.soh.min, 80.0);
    }
}
