pub mod feed;
pub mod telemetry;
