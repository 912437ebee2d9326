pub fn unix_seconds_to_utc_string(unix: i64) -> Option<String> {
    let dt = time::OffsetDateTime::from_unix_timestamp(unix).ok()?;
    Some(format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    ))
}

/// Display timestamp for alerts derived locally (the feed's own alerts carry
/// their timestamps through verbatim).
pub fn now_utc_string() -> String {
    let now = time::OffsetDateTime::now_utc();
    unix_seconds_to_utc_string(now.unix_timestamp()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_instant() {
        // 2026-08-25 12:00:00 UTC
        assert_eq!(
            unix_seconds_to_utc_string(1_787_659_200).as_deref(),
            Some("2026-08-25 12:00:00 UTC")
        );
    }

    #[test]
    fn epoch_formats() {
        assert_eq!(
            unix_seconds_to_utc_string(0).as_deref(),
            Some("1970-01-01 00:00:00 UTC")
        );
    }
}
