use thiserror::Error;

/// Errors produced by the conversion model.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The IANA id is not present in the time zone database.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    /// The wall-clock tuple names no real calendar time, or the computed
    /// instant falls outside the representable range.
    #[error("invalid wall-clock time: {0}")]
    InvalidTime(jiff::Error),

    /// A 12-hour clock value outside `1..=12`.
    #[error("invalid 12-hour clock hour: {0}")]
    InvalidHour(i8),

    #[error("format error: {0}")]
    Format(jiff::Error),
}
