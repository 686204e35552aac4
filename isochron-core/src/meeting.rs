//! Meeting selection state: one instant viewed through chosen zones.

use jiff::Timestamp;

use crate::convert::resolve_zone;
use crate::error::ConvertError;

/// Zone slot filled when the app starts as the local participant.
pub const DEFAULT_USER_ZONE: &str = "Asia/Kolkata";
/// Zone slot filled when the app starts as the remote participant.
pub const DEFAULT_COUNTERPART_ZONE: &str = "America/New_York";
/// Zone the live footer clock reads in by default.
pub const DEFAULT_REFERENCE_ZONE: &str = "Asia/Kolkata";

/// Meeting duration offered to the briefing collaborator, in minutes.
pub const DEFAULT_MEETING_DURATION: u32 = 30;

/// Which selection slot a zone id occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRole {
    User,
    Counterpart,
    Reference,
}

/// The single source of truth for the planned meeting.
///
/// Holds exactly one absolute instant plus the zones it is viewed through.
/// Changing a zone never moves the instant; only [`set_instant`] does.
/// Per-zone wall-clock views are always derived, never stored, so the
/// views cannot drift apart.
///
/// [`set_instant`]: MeetingSelection::set_instant
#[derive(Debug, Clone)]
pub struct MeetingSelection {
    instant: Timestamp,
    user_zone: String,
    counterpart_zone: String,
    reference_zone: String,
}

impl MeetingSelection {
    /// Creates a selection, validating every zone id up front.
    pub fn new(
        instant: Timestamp,
        user_zone: impl Into<String>,
        counterpart_zone: impl Into<String>,
        reference_zone: impl Into<String>,
    ) -> Result<MeetingSelection, ConvertError> {
        let user_zone = user_zone.into();
        let counterpart_zone = counterpart_zone.into();
        let reference_zone = reference_zone.into();
        resolve_zone(&user_zone)?;
        resolve_zone(&counterpart_zone)?;
        resolve_zone(&reference_zone)?;
        Ok(MeetingSelection { instant, user_zone, counterpart_zone, reference_zone })
    }

    pub fn instant(&self) -> Timestamp {
        self.instant
    }

    pub fn set_instant(&mut self, instant: Timestamp) {
        self.instant = instant;
    }

    pub fn zone(&self, role: ZoneRole) -> &str {
        match role {
            ZoneRole::User => &self.user_zone,
            ZoneRole::Counterpart => &self.counterpart_zone,
            ZoneRole::Reference => &self.reference_zone,
        }
    }

    /// Repoints a slot at a new zone. The instant is untouched, so every
    /// other view of the meeting stays put.
    pub fn set_zone(&mut self, role: ZoneRole, id: impl Into<String>) -> Result<(), ConvertError> {
        let id = id.into();
        resolve_zone(&id)?;
        match role {
            ZoneRole::User => self.user_zone = id,
            ZoneRole::Counterpart => self.counterpart_zone = id,
            ZoneRole::Reference => self.reference_zone = id,
        }
        Ok(())
    }
}

/// The top of the hour strictly after `now`: minutes and seconds dropped,
/// one hour added. `14:47:12` becomes `15:00:00`, `14:00:00` likewise.
pub fn next_hour(now: Timestamp) -> Result<Timestamp, ConvertError> {
    let second = (now.as_second().div_euclid(3600) + 1) * 3600;
    Timestamp::from_second(second).map_err(ConvertError::InvalidTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn defaults_round_to_the_next_hour() {
        let now = timestamp("2024-03-15T14:47:00Z");
        assert_eq!(next_hour(now).unwrap(), timestamp("2024-03-15T15:00:00Z"));
    }

    #[test]
    fn next_hour_moves_even_from_an_exact_hour() {
        let now = timestamp("2024-03-15T14:00:00Z");
        assert_eq!(next_hour(now).unwrap(), timestamp("2024-03-15T15:00:00Z"));
    }

    #[test]
    fn next_hour_crosses_midnight() {
        let now = timestamp("2024-12-31T23:59:59Z");
        assert_eq!(next_hour(now).unwrap(), timestamp("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn zone_change_keeps_the_instant() {
        let instant = timestamp("2024-06-01T13:30:00Z");
        let mut meeting =
            MeetingSelection::new(instant, "Asia/Kolkata", "America/New_York", "Asia/Kolkata")
                .unwrap();
        meeting.set_zone(ZoneRole::Counterpart, "Europe/Paris").unwrap();
        meeting.set_zone(ZoneRole::User, "Australia/Sydney").unwrap();
        assert_eq!(meeting.instant(), instant);
        assert_eq!(meeting.zone(ZoneRole::Counterpart), "Europe/Paris");
    }

    #[test]
    fn invalid_zone_is_rejected_and_state_kept() {
        let instant = timestamp("2024-06-01T13:30:00Z");
        let mut meeting =
            MeetingSelection::new(instant, "Asia/Kolkata", "America/New_York", "Asia/Kolkata")
                .unwrap();
        assert!(meeting.set_zone(ZoneRole::User, "Mars/Olympus_Mons").is_err());
        assert_eq!(meeting.zone(ZoneRole::User), "Asia/Kolkata");

        assert!(
            MeetingSelection::new(instant, "Not/A_Zone", "America/New_York", "Asia/Kolkata")
                .is_err()
        );
    }
}
