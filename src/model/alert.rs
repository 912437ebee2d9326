#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlertId(pub u64);

/// Rendering identity for an alert: its id when the feed supplied one,
/// otherwise its position in the list. Positional keys are not stable
/// across reorders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertKey {
    Id(AlertId),
    Index(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
    /// Anything the feed sent that we do not recognize. The raw string is
    /// kept so the badge can show it verbatim.
    Other(String),
}

impl Severity {
    pub fn parse(s: &str) -> Self {
        match s {
            "High" => Severity::High,
            "Medium" => Severity::Medium,
            "Low" => Severity::Low,
            other => Severity::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Other(s) => s,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Alert {
    pub id: Option<AlertId>,
    /// Category label ("Overheat", "Overvoltage", ...). Unrecognized values
    /// fall back to a generic glyph, they are never an error.
    pub kind: String,
    pub severity: Severity,
    pub resolved: bool,
    pub message: String,
    /// Pre-formatted display string; never parsed or validated.
    pub timestamp: String,
}

impl Alert {
    pub fn key(&self, index: usize) -> AlertKey {
        match self.id {
            Some(id) => AlertKey::Id(id),
            None => AlertKey::Index(index),
        }
    }

    /// Badge text: "Resolved" wins over the severity label.
    pub fn badge_text(&self) -> &str {
        if self.resolved {
            "Resolved"
        } else {
            self.severity.label()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parse_known_and_unknown() {
        assert_eq!(Severity::parse("High"), Severity::High);
        assert_eq!(Severity::parse("Medium"), Severity::Medium);
        assert_eq!(Severity::parse("Low"), Severity::Low);
        assert_eq!(
            Severity::parse("Unknown"),
            Severity::Other("Unknown".to_string())
        );
        // Case-sensitive on the known set.
        assert_eq!(Severity::parse("high"), Severity::Other("high".to_string()));
    }

    #[test]
    fn severity_label_roundtrips_raw_text() {
        assert_eq!(Severity::parse("Unknown").label(), "Unknown");
        assert_eq!(Severity::High.label(), "High");
    }

    #[test]
    fn key_prefers_id_over_index() {
        let mut alert = Alert {
            id: Some(AlertId(7)),
            kind: "Overheat".into(),
            severity: Severity::High,
            resolved: false,
            message: String::new(),
            timestamp: String::new(),
        };
        assert_eq!(alert.key(3), AlertKey::Id(AlertId(7)));
        alert.id = None;
        assert_eq!(alert.key(3), AlertKey::Index(3));
    }

    #[test]
    fn badge_text_resolved_overrides_severity() {
        let alert = Alert {
            id: None,
            kind: "Overheat".into(),
            severity: Severity::High,
            resolved: true,
            message: String::new(),
            timestamp: String::new(),
        };
        assert_eq!(alert.badge_text(), "Resolved");
    }
}
