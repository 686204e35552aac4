use isochron_core::{
    COMMON_TIMEZONES, Countdown, MeetingSelection, WallClockFields, ZoneRole, clock_12h,
    from_wall_clock, next_hour, resolve_zone, to_wall_clock, weekday_date,
};
use jiff::Timestamp;

fn timestamp(s: &str) -> Timestamp {
    s.parse().unwrap()
}

// Instants on both sides of daylight saving for every catalog zone, none of
// them inside a fold anywhere in the catalog.
const SAMPLE_INSTANTS: &[&str] = &[
    "2024-01-15T12:00:00Z",
    "2024-02-29T23:30:00Z",
    "2024-05-15T04:00:00Z",
    "2024-07-04T17:45:30Z",
    "2024-09-10T09:10:11Z",
    "2024-12-25T06:00:00Z",
    "2025-06-30T23:59:59Z",
];

#[test]
fn round_trip_holds_across_the_catalog() {
    for sample in SAMPLE_INSTANTS {
        let instant = timestamp(sample);
        for zone in COMMON_TIMEZONES {
            let tz = resolve_zone(zone.id).unwrap();
            let fields = to_wall_clock(instant, &tz);
            let back = from_wall_clock(fields, &tz).unwrap();
            assert_eq!(back, instant, "round trip failed for {} at {}", zone.id, sample);
        }
    }
}

#[test]
fn changing_a_zone_never_moves_the_instant() {
    let instant = timestamp("2024-07-04T17:45:30Z");
    let mut meeting =
        MeetingSelection::new(instant, "Asia/Kolkata", "America/New_York", "Asia/Kolkata")
            .unwrap();

    for zone in COMMON_TIMEZONES {
        meeting.set_zone(ZoneRole::Counterpart, zone.id).unwrap();
        assert_eq!(meeting.instant(), instant);
    }

    // The user's own view is also untouched by the counterpart churn.
    let kolkata = resolve_zone("Asia/Kolkata").unwrap();
    assert_eq!(clock_12h(meeting.instant(), &kolkata).unwrap(), "11:15 PM");
}

#[test]
fn editing_one_field_preserves_the_rest() {
    // A card edit projects, patches one field, and resolves back.
    let ny = resolve_zone("America/New_York").unwrap();
    let start = from_wall_clock(
        WallClockFields { year: 2024, month: 6, day: 1, hour: 9, minute: 30, second: 0 },
        &ny,
    )
    .unwrap();

    let mut fields = to_wall_clock(start, &ny);
    fields.minute = 45;
    let edited = from_wall_clock(fields, &ny).unwrap();

    assert_eq!(
        to_wall_clock(edited, &ny),
        WallClockFields { year: 2024, month: 6, day: 1, hour: 9, minute: 45, second: 0 }
    );
    assert_eq!(edited.as_second() - start.as_second(), 15 * 60);
}

#[test]
fn an_edit_in_one_zone_shows_up_everywhere() {
    let ny = resolve_zone("America/New_York").unwrap();
    let kolkata = resolve_zone("Asia/Kolkata").unwrap();

    let mut meeting = MeetingSelection::new(
        timestamp("2024-06-01T13:30:00Z"),
        "Asia/Kolkata",
        "America/New_York",
        "Asia/Kolkata",
    )
    .unwrap();

    // Counterpart bumps their card from 9:30 AM to 10:30 AM.
    let mut fields = to_wall_clock(meeting.instant(), &ny);
    fields.hour += 1;
    meeting.set_instant(from_wall_clock(fields, &ny).unwrap());

    assert_eq!(clock_12h(meeting.instant(), &ny).unwrap(), "10:30 AM");
    assert_eq!(clock_12h(meeting.instant(), &kolkata).unwrap(), "8:00 PM");
    assert_eq!(weekday_date(meeting.instant(), &kolkata).unwrap(), "Sat, Jun 1");
}

#[test]
fn default_instant_is_the_next_top_of_hour() {
    let now = timestamp("2024-03-15T14:47:00Z");
    let instant = next_hour(now).unwrap();
    assert_eq!(instant, timestamp("2024-03-15T15:00:00Z"));

    // And the footer counts down to it.
    assert_eq!(
        Countdown::between(now, instant),
        Countdown::Pending { days: 0, hours: 0, minutes: 13, seconds: 0 }
    );
}

#[test]
fn unknown_zones_surface_as_errors_end_to_end() {
    let err = MeetingSelection::new(
        timestamp("2024-06-01T13:30:00Z"),
        "Mars/Olympus_Mons",
        "America/New_York",
        "Asia/Kolkata",
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown time zone"));
    assert!(resolve_zone("Not/A_Real_Zone").is_err());
}
