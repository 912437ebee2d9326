use crate::model::{Alert, Severity};

/// View-local filter over the alert list. Lives only for the app's lifetime,
/// mutated by the filter chips, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertFilter {
    All,
    High,
    Medium,
    Resolved,
}

impl Default for AlertFilter {
    fn default() -> Self {
        Self::All
    }
}

impl AlertFilter {
    pub const CHIPS: [AlertFilter; 4] = [
        AlertFilter::All,
        AlertFilter::High,
        AlertFilter::Medium,
        AlertFilter::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertFilter::All => "All",
            AlertFilter::High => "High",
            AlertFilter::Medium => "Medium",
            AlertFilter::Resolved => "Resolved",
        }
    }

    /// Unrecognized strings select `All`, so any value coming from the
    /// command line maps to a valid filter.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => AlertFilter::High,
            "medium" => AlertFilter::Medium,
            "resolved" => AlertFilter::Resolved,
            _ => AlertFilter::All,
        }
    }

    /// The filter predicate. High and Medium only match unresolved alerts;
    /// resolved state always wins over severity.
    pub fn matches(self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Resolved => alert.resolved,
            AlertFilter::High => alert.severity == Severity::High && !alert.resolved,
            AlertFilter::Medium => alert.severity == Severity::Medium && !alert.resolved,
        }
    }
}

#[derive(Default)]
pub struct UiState {
    pub filter: AlertFilter,
    pub show_about: bool,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(severity: Severity, resolved: bool) -> Alert {
        Alert {
            id: None,
            kind: "Overheat".into(),
            severity,
            resolved,
            message: String::new(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn all_matches_everything() {
        for a in [
            alert(Severity::High, false),
            alert(Severity::Low, true),
            alert(Severity::Other("Unknown".into()), false),
        ] {
            assert!(AlertFilter::All.matches(&a));
        }
    }

    #[test]
    fn high_and_medium_exclude_resolved() {
        assert!(AlertFilter::High.matches(&alert(Severity::High, false)));
        assert!(!AlertFilter::High.matches(&alert(Severity::High, true)));
        assert!(AlertFilter::Medium.matches(&alert(Severity::Medium, false)));
        assert!(!AlertFilter::Medium.matches(&alert(Severity::Medium, true)));
    }

    #[test]
    fn resolved_matches_regardless_of_severity() {
        assert!(AlertFilter::Resolved.matches(&alert(Severity::High, true)));
        assert!(AlertFilter::Resolved.matches(&alert(Severity::Other("x".into()), true)));
        assert!(!AlertFilter::Resolved.matches(&alert(Severity::High, false)));
    }

    #[test]
    fn parse_falls_back_to_all() {
        assert_eq!(AlertFilter::parse("high"), AlertFilter::High);
        assert_eq!(AlertFilter::parse(" Resolved "), AlertFilter::Resolved);
        assert_eq!(AlertFilter::parse("bogus"), AlertFilter::All);
        assert_eq!(AlertFilter::parse(""), AlertFilter::All);
    }

    #[test]
    fn matches_does_not_mutate_the_alert() {
        let a = alert(Severity::High, false);
        let before = a.clone();
        let _ = AlertFilter::High.matches(&a);
        assert_eq!(a.resolved, before.resolved);
        assert_eq!(a.severity, before.severity);
    }
}
