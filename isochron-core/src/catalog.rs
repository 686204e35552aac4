//! The zone catalog offered by the pickers, plus live display metadata.
//!
//! The static tables carry human-readable names and the *standard-time*
//! abbreviation and offset for each zone. Displays that must be correct
//! across daylight saving use [`zone_abbreviation`] and [`offset_label`],
//! which consult the time zone database for the offset in effect at a
//! particular instant.

use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Display metadata for one pickable time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneDescriptor {
    /// IANA identifier, e.g. `America/New_York`.
    pub id: &'static str,
    /// Human-readable place name.
    pub name: &'static str,
    /// Standard-time abbreviation.
    pub abbrev: &'static str,
    /// Standard-time offset label, shown when no instant is at hand.
    pub offset_label: &'static str,
}

/// A slot in the fixed reference clock strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceZone {
    pub label: &'static str,
    pub region: &'static str,
    pub id: &'static str,
}

/// Curated zones offered by the zone pickers, grouped by region.
pub const COMMON_TIMEZONES: &[ZoneDescriptor] = &[
    ZoneDescriptor { id: "UTC", name: "UTC (Universal Time)", abbrev: "UTC", offset_label: "GMT+00:00" },
    // Americas
    ZoneDescriptor { id: "America/New_York", name: "New York, USA (Eastern)", abbrev: "EST", offset_label: "GMT-05:00" },
    ZoneDescriptor { id: "America/Toronto", name: "Toronto, Canada (Eastern)", abbrev: "EST", offset_label: "GMT-05:00" },
    ZoneDescriptor { id: "America/Chicago", name: "Chicago, USA (Central)", abbrev: "CST", offset_label: "GMT-06:00" },
    ZoneDescriptor { id: "America/Winnipeg", name: "Winnipeg, Canada (Central)", abbrev: "CST", offset_label: "GMT-06:00" },
    ZoneDescriptor { id: "America/Denver", name: "Denver, USA (Mountain)", abbrev: "MST", offset_label: "GMT-07:00" },
    ZoneDescriptor { id: "America/Phoenix", name: "Phoenix, USA (Mountain - No DST)", abbrev: "MST", offset_label: "GMT-07:00" },
    ZoneDescriptor { id: "America/Los_Angeles", name: "Los Angeles, USA (Pacific)", abbrev: "PST", offset_label: "GMT-08:00" },
    ZoneDescriptor { id: "America/Vancouver", name: "Vancouver, Canada (Pacific)", abbrev: "PST", offset_label: "GMT-08:00" },
    ZoneDescriptor { id: "America/Anchorage", name: "Anchorage, USA (Alaska)", abbrev: "AKST", offset_label: "GMT-09:00" },
    ZoneDescriptor { id: "Pacific/Honolulu", name: "Honolulu, USA (Hawaii)", abbrev: "HST", offset_label: "GMT-10:00" },
    // Europe
    ZoneDescriptor { id: "Europe/London", name: "London, UK", abbrev: "GMT", offset_label: "GMT+00:00" },
    ZoneDescriptor { id: "Europe/Dublin", name: "Dublin, Ireland", abbrev: "GMT", offset_label: "GMT+00:00" },
    ZoneDescriptor { id: "Europe/Paris", name: "Paris, France", abbrev: "CET", offset_label: "GMT+01:00" },
    ZoneDescriptor { id: "Europe/Berlin", name: "Berlin, Germany", abbrev: "CET", offset_label: "GMT+01:00" },
    ZoneDescriptor { id: "Europe/Zurich", name: "Zurich, Switzerland", abbrev: "CET", offset_label: "GMT+01:00" },
    ZoneDescriptor { id: "Europe/Amsterdam", name: "Amsterdam, Netherlands", abbrev: "CET", offset_label: "GMT+01:00" },
    ZoneDescriptor { id: "Europe/Rome", name: "Rome, Italy", abbrev: "CET", offset_label: "GMT+01:00" },
    ZoneDescriptor { id: "Europe/Madrid", name: "Madrid, Spain", abbrev: "CET", offset_label: "GMT+01:00" },
    // Asia
    ZoneDescriptor { id: "Asia/Kolkata", name: "New Delhi, India", abbrev: "IST", offset_label: "GMT+05:30" },
    // Australia
    ZoneDescriptor { id: "Australia/Perth", name: "Perth, Australia (Western)", abbrev: "AWST", offset_label: "GMT+08:00" },
    ZoneDescriptor { id: "Australia/Adelaide", name: "Adelaide, Australia (Central)", abbrev: "ACST", offset_label: "GMT+09:30" },
    ZoneDescriptor { id: "Australia/Brisbane", name: "Brisbane, Australia (Eastern)", abbrev: "AEST", offset_label: "GMT+10:00" },
    ZoneDescriptor { id: "Australia/Sydney", name: "Sydney, Australia (Eastern)", abbrev: "AEST", offset_label: "GMT+10:00" },
    ZoneDescriptor { id: "Australia/Melbourne", name: "Melbourne, Australia (Eastern)", abbrev: "AEST", offset_label: "GMT+10:00" },
];

/// The always-visible reference clock strip.
pub const REFERENCE_ZONES: &[ReferenceZone] = &[
    ReferenceZone { label: "PST", region: "Pacific", id: "America/Los_Angeles" },
    ReferenceZone { label: "EST", region: "Eastern", id: "America/New_York" },
    ReferenceZone { label: "GMT", region: "London", id: "Europe/London" },
    ReferenceZone { label: "IST", region: "India", id: "Asia/Kolkata" },
];

/// Finds the catalog entry for an IANA id, if the catalog carries one.
///
/// Zones outside the catalog are still convertible; they just render with
/// the bare id instead of a friendly name.
pub fn lookup(id: &str) -> Option<&'static ZoneDescriptor> {
    COMMON_TIMEZONES.iter().find(|zone| zone.id == id)
}

/// Abbreviation in effect at the instant, e.g. `EST` vs `EDT`.
pub fn zone_abbreviation(zone: &TimeZone, instant: Timestamp) -> String {
    zone.to_offset_info(instant).abbreviation().to_string()
}

/// `GMT±HH:MM` label for the offset in effect at the instant.
pub fn offset_label(zone: &TimeZone, instant: Timestamp) -> String {
    let seconds = zone.to_offset_info(instant).offset().seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("GMT{}{:02}:{:02}", sign, abs / 3600, abs % 3600 / 60)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::convert::resolve_zone;

    #[test]
    fn every_catalog_id_resolves() {
        for zone in COMMON_TIMEZONES {
            assert!(resolve_zone(zone.id).is_ok(), "{} should resolve", zone.id);
        }
        for zone in REFERENCE_ZONES {
            assert!(resolve_zone(zone.id).is_ok(), "{} should resolve", zone.id);
        }
    }

    #[test]
    fn lookup_finds_known_ids() {
        let ny = lookup("America/New_York").unwrap();
        assert_eq!(ny.name, "New York, USA (Eastern)");
        assert!(lookup("Mars/Olympus_Mons").is_none());
    }

    #[test]
    fn abbreviation_tracks_daylight_saving() {
        let ny = resolve_zone("America/New_York").unwrap();
        let winter: Timestamp = "2024-01-15T12:00:00Z".parse().unwrap();
        let summer: Timestamp = "2024-07-15T12:00:00Z".parse().unwrap();
        assert_eq!(zone_abbreviation(&ny, winter), "EST");
        assert_eq!(zone_abbreviation(&ny, summer), "EDT");
    }

    #[test]
    fn offset_label_handles_sign_and_half_hours() {
        let winter: Timestamp = "2024-01-15T12:00:00Z".parse().unwrap();
        let summer: Timestamp = "2024-07-15T12:00:00Z".parse().unwrap();

        let kolkata = resolve_zone("Asia/Kolkata").unwrap();
        assert_eq!(offset_label(&kolkata, winter), "GMT+05:30");

        let ny = resolve_zone("America/New_York").unwrap();
        assert_eq!(offset_label(&ny, winter), "GMT-05:00");
        assert_eq!(offset_label(&ny, summer), "GMT-04:00");

        let utc = resolve_zone("UTC").unwrap();
        assert_eq!(offset_label(&utc, winter), "GMT+00:00");
    }
}
