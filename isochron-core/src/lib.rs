//! Isochron core - the timezone conversion model behind the meeting planner.
//!
//! One absolute instant is the source of truth; everything visible is a
//! projection of it through an IANA zone. [`convert`] holds the projection
//! math, [`meeting`] the selection state, [`catalog`] the pickable zones,
//! [`countdown`] the live footer arithmetic and [`format`] the canonical
//! text renderings.

pub mod catalog;
pub mod convert;
pub mod countdown;
pub mod error;
pub mod format;
pub mod meeting;

pub use catalog::{
    COMMON_TIMEZONES, REFERENCE_ZONES, ReferenceZone, ZoneDescriptor, lookup, offset_label,
    zone_abbreviation,
};
pub use convert::{
    Meridiem, WallClockFields, days_in_month, from_wall_clock, resolve_zone, to_12_hour,
    to_24_hour, to_wall_clock,
};
pub use countdown::Countdown;
pub use error::ConvertError;
pub use format::{clock_12h, clock_seconds, meridiem_label, weekday_date};
pub use meeting::{
    DEFAULT_COUNTERPART_ZONE, DEFAULT_MEETING_DURATION, DEFAULT_REFERENCE_ZONE, DEFAULT_USER_ZONE,
    MeetingSelection, ZoneRole, next_hour,
};
