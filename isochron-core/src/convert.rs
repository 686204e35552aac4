//! Instant / wall-clock conversion through the IANA time zone database.
//!
//! The model keeps a single absolute instant as the source of truth and
//! projects it into per-zone wall-clock fields on demand. The projections
//! obey a round-trip law: interpreting a projection back in the same zone
//! recovers the original instant, except when the wall-clock time falls in
//! a daylight-saving fold, where one local reading names two instants and
//! the earlier one wins.

use jiff::Timestamp;
use jiff::civil;
use jiff::tz::TimeZone;

use crate::error::ConvertError;

/// Naive local time fields with no zone attached.
///
/// Ephemeral by design: projections are recomputed from the instant, never
/// stored. Equal field values in different zones are different instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockFields {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    /// Hour on the 24-hour clock, `0..=23`.
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
}

impl WallClockFields {
    fn to_civil(self) -> Result<civil::DateTime, ConvertError> {
        civil::DateTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            0,
        )
        .map_err(ConvertError::InvalidTime)
    }
}

impl From<civil::DateTime> for WallClockFields {
    fn from(dt: civil::DateTime) -> WallClockFields {
        WallClockFields {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Resolves an IANA zone id against the time zone database.
///
/// Unknown ids are an error, never a silent fallback to UTC.
pub fn resolve_zone(id: &str) -> Result<TimeZone, ConvertError> {
    TimeZone::get(id).map_err(|_| ConvertError::UnknownZone(id.to_string()))
}

/// Projects the instant onto the zone's calendar, using the offset in
/// effect at that instant.
pub fn to_wall_clock(instant: Timestamp, zone: &TimeZone) -> WallClockFields {
    WallClockFields::from(zone.to_datetime(instant))
}

/// Interprets naive fields as wall-clock time in the zone and resolves
/// the absolute instant.
///
/// Daylight-saving edges resolve compatibly: a repeated local time (the
/// fall-back fold) takes the earlier offset, and a skipped local time (the
/// spring-forward gap) shifts forward past the gap. Tuples that name no
/// real calendar time, like June 31, are rejected.
pub fn from_wall_clock(fields: WallClockFields, zone: &TimeZone) -> Result<Timestamp, ConvertError> {
    let dt = fields.to_civil()?;
    let zoned = zone
        .to_ambiguous_zoned(dt)
        .compatible()
        .map_err(ConvertError::InvalidTime)?;
    Ok(zoned.timestamp())
}

/// Days in the given month, for editors that wrap the day field.
pub fn days_in_month(year: i16, month: i8) -> Result<i8, ConvertError> {
    let date = civil::Date::new(year, month, 1).map_err(ConvertError::InvalidTime)?;
    Ok(date.days_in_month())
}

/// Half-day marker for 12-hour clock displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn toggled(self) -> Meridiem {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }
}

/// Converts an hour on the 12-hour clock plus meridiem to the 24-hour
/// clock. 12 AM is midnight and 12 PM is noon.
pub fn to_24_hour(hour12: i8, meridiem: Meridiem) -> Result<i8, ConvertError> {
    if !(1..=12).contains(&hour12) {
        return Err(ConvertError::InvalidHour(hour12));
    }
    Ok(match (hour12, meridiem) {
        (12, Meridiem::Am) => 0,
        (12, Meridiem::Pm) => 12,
        (hour, Meridiem::Am) => hour,
        (hour, Meridiem::Pm) => hour + 12,
    })
}

/// Splits a 24-hour clock hour into the 12-hour clock hour and meridiem.
pub fn to_12_hour(hour24: i8) -> (i8, Meridiem) {
    let meridiem = if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm };
    let hour12 = match hour24 % 12 {
        0 => 12,
        hour => hour,
    };
    (hour12, meridiem)
}
