mod alert;
mod battery;
mod store;

pub use alert::{Alert, AlertId, AlertKey, Severity};
pub use battery::{BatterySnapshot, FaultFlag, Range, Thresholds};
pub use store::AlertStore;
