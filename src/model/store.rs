use crate::model::{Alert, AlertId, AlertKey, Severity};

#[derive(Default)]
pub struct AlertStore {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertStore {
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn as_slice(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.resolved).count()
    }

    /// Assigns an id when the alert has none, so store-owned alerts always
    /// have a stable rendering key.
    pub fn push(&mut self, mut alert: Alert) -> AlertId {
        let id = match alert.id {
            Some(id) => id,
            None => AlertId(self.next_id.max(1)),
        };
        alert.id = Some(id);
        self.next_id = self.next_id.max(id.0 + 1);
        self.alerts.push(alert);
        id
    }

    pub fn from_alerts(alerts: Vec<Alert>) -> Self {
        let mut s = Self::default();
        for alert in alerts {
            s.push(alert);
        }
        s
    }

    pub fn resolve(&mut self, key: AlertKey) -> bool {
        let alert = match key {
            AlertKey::Id(id) => self.alerts.iter_mut().find(|a| a.id == Some(id)),
            AlertKey::Index(i) => self.alerts.get_mut(i),
        };
        match alert {
            Some(a) => {
                a.resolved = true;
                true
            }
            None => false,
        }
    }

    pub fn demo() -> Self {
        let mut s = Self::default();

        s.push(Alert {
            id: None,
            kind: "Overheat".into(),
            severity: Severity::High,
            resolved: false,
            message: "Cell temperature 85C exceeds the 45C limit.".into(),
            timestamp: "2026-08-25 12:00:14 UTC".into(),
        });

        s.push(Alert {
            id: None,
            kind: "Overvoltage".into(),
            severity: Severity::Medium,
            resolved: false,
            message: "Pack voltage 54.6V above the configured maximum.".into(),
            timestamp: "2026-08-25 12:02:41 UTC".into(),
        });

        s.push(Alert {
            id: None,
            kind: "SOC Low".into(),
            severity: Severity::Low,
            resolved: false,
            message: "State of charge at 18%, below the 20% floor.".into(),
            timestamp: "2026-08-25 12:05:03 UTC".into(),
        });

        s.push(Alert {
            id: None,
            kind: "Short Circuit".into(),
            severity: Severity::High,
            resolved: true,
            message: "Transient short on cell group 3, cleared by BMS.".into(),
            timestamp: "2026-08-25 11:48:37 UTC".into(),
        });

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(kind: &str) -> Alert {
        Alert {
            id: None,
            kind: kind.into(),
            severity: Severity::Medium,
            resolved: false,
            message: String::new(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn push_assigns_monotonic_ids() {
        let mut s = AlertStore::default();
        let a = s.push(alert("Overheat"));
        let b = s.push(alert("Overvoltage"));
        assert!(b.0 > a.0);
        assert!(s.iter().all(|a| a.id.is_some()));
    }

    #[test]
    fn push_keeps_feed_supplied_ids() {
        let mut s = AlertStore::default();
        s.push(Alert {
            id: Some(AlertId(40)),
            ..alert("Overheat")
        });
        let next = s.push(alert("Overvoltage"));
        assert_eq!(next, AlertId(41));
    }

    #[test]
    fn resolve_by_id_and_index() {
        let mut s = AlertStore::from_alerts(vec![alert("Overheat"), alert("Overvoltage")]);
        let id = s.as_slice()[0].id.unwrap();
        assert!(s.resolve(AlertKey::Id(id)));
        assert!(s.as_slice()[0].resolved);
        assert!(s.resolve(AlertKey::Index(1)));
        assert!(s.as_slice()[1].resolved);
        assert!(!s.resolve(AlertKey::Index(9)));
    }

    #[test]
    fn active_count_skips_resolved() {
        let mut s = AlertStore::demo();
        let before = s.active_count();
        s.resolve(AlertKey::Index(0));
        assert_eq!(s.active_count(), before - 1);
    }
}
