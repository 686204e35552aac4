//! Canonical text renderings of an instant viewed in a zone.

use jiff::Timestamp;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

use crate::error::ConvertError;

/// `9:30 AM` style clock, hour unpadded.
pub fn clock_12h(instant: Timestamp, zone: &TimeZone) -> Result<String, ConvertError> {
    render("%-I:%M %p", instant, zone)
}

/// `Sat, Jun 1` style weekday and date, day unpadded.
pub fn weekday_date(instant: Timestamp, zone: &TimeZone) -> Result<String, ConvertError> {
    render("%a, %b %-d", instant, zone)
}

/// `09:30:05` style seconds clock for the live footer, 12-hour, padded.
pub fn clock_seconds(instant: Timestamp, zone: &TimeZone) -> Result<String, ConvertError> {
    render("%I:%M:%S", instant, zone)
}

/// `AM` or `PM` for the instant in the zone.
pub fn meridiem_label(instant: Timestamp, zone: &TimeZone) -> Result<String, ConvertError> {
    render("%p", instant, zone)
}

fn render(fmt: &str, instant: Timestamp, zone: &TimeZone) -> Result<String, ConvertError> {
    let zoned = instant.to_zoned(zone.clone());
    strtime::format(fmt, &zoned).map_err(ConvertError::Format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::resolve_zone;

    fn timestamp(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn renders_the_card_clock() {
        let ny = resolve_zone("America/New_York").unwrap();
        let instant = timestamp("2024-06-01T13:30:00Z");
        assert_eq!(clock_12h(instant, &ny).unwrap(), "9:30 AM");
        assert_eq!(weekday_date(instant, &ny).unwrap(), "Sat, Jun 1");
        assert_eq!(meridiem_label(instant, &ny).unwrap(), "AM");
    }

    #[test]
    fn renders_the_footer_clock_padded() {
        let ny = resolve_zone("America/New_York").unwrap();
        let instant = timestamp("2024-06-01T13:30:05Z");
        assert_eq!(clock_seconds(instant, &ny).unwrap(), "09:30:05");
    }

    #[test]
    fn noon_and_midnight_read_as_twelve() {
        let utc = resolve_zone("UTC").unwrap();
        assert_eq!(clock_12h(timestamp("2024-06-01T00:00:00Z"), &utc).unwrap(), "12:00 AM");
        assert_eq!(clock_12h(timestamp("2024-06-01T12:00:00Z"), &utc).unwrap(), "12:00 PM");
    }

    #[test]
    fn same_instant_reads_differently_per_zone() {
        let instant = timestamp("2024-06-01T13:30:00Z");
        let kolkata = resolve_zone("Asia/Kolkata").unwrap();
        let sydney = resolve_zone("Australia/Sydney").unwrap();
        assert_eq!(clock_12h(instant, &kolkata).unwrap(), "7:00 PM");
        assert_eq!(clock_12h(instant, &sydney).unwrap(), "11:30 PM");
        assert_eq!(weekday_date(instant, &sydney).unwrap(), "Sat, Jun 1");
    }
}
