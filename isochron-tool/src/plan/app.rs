use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::oneshot;

use isochron_briefing::{BriefingClient, BriefingError, BriefingRequest, MeetingBrief};
use isochron_core::{
    COMMON_TIMEZONES, ConvertError, DEFAULT_MEETING_DURATION, MeetingSelection, WallClockFields,
    ZoneRole, clock_12h, days_in_month, from_wall_clock, next_hour, resolve_zone, to_12_hour,
    to_24_hour, to_wall_clock, weekday_date,
};

use crate::error::IsnError;

/// Bounds for the brief duration stepper, in minutes.
const MIN_DURATION: u32 = 15;
const MAX_DURATION: u32 = 240;
const DURATION_STEP: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    ZonePicker,
    BriefForm,
    Loading,
    BriefResult,
}

/// Editable wall-clock fields on a card, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Meridiem,
}

impl EditField {
    pub fn next(self) -> EditField {
        match self {
            EditField::Year => EditField::Month,
            EditField::Month => EditField::Day,
            EditField::Day => EditField::Hour,
            EditField::Hour => EditField::Minute,
            EditField::Minute => EditField::Meridiem,
            EditField::Meridiem => EditField::Year,
        }
    }

    pub fn prev(self) -> EditField {
        match self {
            EditField::Year => EditField::Meridiem,
            EditField::Month => EditField::Year,
            EditField::Day => EditField::Month,
            EditField::Hour => EditField::Day,
            EditField::Minute => EditField::Hour,
            EditField::Meridiem => EditField::Minute,
        }
    }
}

pub struct PlanApp {
    pub mode: AppMode,
    pub should_quit: bool,
    pub meeting: MeetingSelection,
    pub now: Timestamp,

    pub focused_card: ZoneRole,
    pub focused_field: EditField,

    // Zone picker state
    pub picker_selected: usize,

    // Brief form state
    pub topic: String,
    pub topic_cursor: usize,
    pub duration_minutes: u32,
    pub brief: Option<MeetingBrief>,

    pub client: Option<Arc<BriefingClient>>,
    pub brief_rx: Option<oneshot::Receiver<Result<MeetingBrief, BriefingError>>>,
    pub last_error: Option<String>,
}

impl PlanApp {
    pub fn new(
        user_zone: String,
        counterpart_zone: String,
        reference_zone: String,
        client: Option<BriefingClient>,
    ) -> Result<Self, IsnError> {
        let now = Timestamp::now();
        let meeting =
            MeetingSelection::new(next_hour(now)?, user_zone, counterpart_zone, reference_zone)?;

        Ok(Self {
            mode: AppMode::Normal,
            should_quit: false,
            meeting,
            now,
            focused_card: ZoneRole::User,
            focused_field: EditField::Hour,
            picker_selected: 0,
            topic: String::new(),
            topic_cursor: 0,
            duration_minutes: DEFAULT_MEETING_DURATION,
            brief: None,
            client: client.map(Arc::new),
            brief_rx: None,
            last_error: None,
        })
    }

    pub fn on_tick(&mut self) {
        self.now = Timestamp::now();
    }

    pub fn switch_card(&mut self) {
        self.focused_card = match self.focused_card {
            ZoneRole::Counterpart => ZoneRole::User,
            _ => ZoneRole::Counterpart,
        };
    }

    pub fn field_left(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn field_right(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Applies `delta` steps to the focused field of the focused card.
    ///
    /// Projects the instant into the card's zone, patches one field, and
    /// resolves the patched fields back to an instant. A patch that names
    /// no real time is dropped and the instant stays put.
    pub fn adjust_field(&mut self, delta: i64) {
        let zone = match resolve_zone(self.meeting.zone(self.focused_card)) {
            Ok(zone) => zone,
            Err(e) => {
                self.last_error = Some(e.to_string());
                return;
            }
        };

        let mut fields = to_wall_clock(self.meeting.instant(), &zone);
        if let Err(e) = patch_field(&mut fields, self.focused_field, delta) {
            self.last_error = Some(e.to_string());
            return;
        }

        match from_wall_clock(fields, &zone) {
            Ok(instant) => {
                self.meeting.set_instant(instant);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("Edit ignored: {}", e));
            }
        }
    }

    pub fn reset_to_next_hour(&mut self) {
        match next_hour(self.now) {
            Ok(instant) => {
                self.meeting.set_instant(instant);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub fn open_zone_picker(&mut self) {
        let current = self.meeting.zone(self.focused_card);
        self.picker_selected = COMMON_TIMEZONES
            .iter()
            .position(|z| z.id == current)
            .unwrap_or(0);
        self.mode = AppMode::ZonePicker;
    }

    pub fn close_popup(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn picker_up(&mut self) {
        if self.picker_selected > 0 {
            self.picker_selected -= 1;
        }
    }

    pub fn picker_down(&mut self) {
        if self.picker_selected < COMMON_TIMEZONES.len() - 1 {
            self.picker_selected += 1;
        }
    }

    pub fn picker_select(&mut self) {
        let id = COMMON_TIMEZONES[self.picker_selected].id;
        if let Err(e) = self.meeting.set_zone(self.focused_card, id) {
            self.last_error = Some(e.to_string());
        }
        self.close_popup();
    }

    pub fn open_brief_form(&mut self) {
        if self.client.is_none() {
            self.last_error = Some(
                "Briefs need an API key. Set OPENROUTER_API_KEY or the config file.".to_string(),
            );
            return;
        }
        self.mode = AppMode::BriefForm;
    }

    pub fn duration_up(&mut self) {
        self.duration_minutes = (self.duration_minutes + DURATION_STEP).min(MAX_DURATION);
    }

    pub fn duration_down(&mut self) {
        self.duration_minutes = self
            .duration_minutes
            .saturating_sub(DURATION_STEP)
            .max(MIN_DURATION);
    }

    pub fn send_brief(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };

        let topic = self.topic.trim().to_string();
        if topic.is_empty() {
            return;
        }

        let request = match self.briefing_request(topic) {
            Ok(request) => request,
            Err(e) => {
                self.last_error = Some(e.to_string());
                return;
            }
        };

        // Spawn async task
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = client.generate(&request).await;
            let _ = tx.send(result);
        });

        self.brief_rx = Some(rx);
        self.mode = AppMode::Loading;
        self.last_error = None;
    }

    fn briefing_request(&self, topic: String) -> Result<BriefingRequest, ConvertError> {
        let instant = self.meeting.instant();
        let user_id = self.meeting.zone(ZoneRole::User);
        let counterpart_id = self.meeting.zone(ZoneRole::Counterpart);
        let user_zone = resolve_zone(user_id)?;
        let counterpart_zone = resolve_zone(counterpart_id)?;

        Ok(BriefingRequest {
            topic,
            duration_minutes: self.duration_minutes,
            user_time: format!(
                "{} {}",
                clock_12h(instant, &user_zone)?,
                weekday_date(instant, &user_zone)?
            ),
            user_zone: user_id.to_string(),
            counterpart_time: format!(
                "{} {}",
                clock_12h(instant, &counterpart_zone)?,
                weekday_date(instant, &counterpart_zone)?
            ),
            counterpart_zone: counterpart_id.to_string(),
        })
    }

    pub fn poll_brief(&mut self) {
        if let Some(ref mut rx) = self.brief_rx {
            match rx.try_recv() {
                Ok(Ok(brief)) => {
                    self.brief = Some(brief);
                    self.brief_rx = None;
                    self.mode = AppMode::BriefResult;
                }
                Ok(Err(e)) => {
                    // The planner stays up on collaborator failure: show
                    // the fixed fallback and note the cause.
                    self.last_error = Some(e.to_string());
                    self.brief = Some(MeetingBrief::fallback());
                    self.brief_rx = None;
                    self.mode = AppMode::BriefResult;
                }
                Err(oneshot::error::TryRecvError::Empty) => {
                    // Still waiting
                }
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.last_error = Some("Brief request cancelled".to_string());
                    self.brief_rx = None;
                    self.mode = AppMode::Normal;
                }
            }
        }
    }

    pub fn cancel_brief(&mut self) {
        self.brief_rx = None;
        self.mode = AppMode::BriefForm;
        self.last_error = Some("Brief request cancelled".to_string());
    }

    pub fn topic_char(&mut self, c: char) {
        self.topic.insert(self.topic_cursor, c);
        self.topic_cursor += c.len_utf8();
    }

    pub fn topic_backspace(&mut self) {
        if self.topic_cursor > 0 {
            let prev = self.topic[..self.topic_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.topic.remove(prev);
            self.topic_cursor = prev;
        }
    }

    pub fn topic_left(&mut self) {
        if self.topic_cursor > 0 {
            self.topic_cursor = self.topic[..self.topic_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn topic_right(&mut self) {
        if self.topic_cursor < self.topic.len() {
            self.topic_cursor = self.topic[self.topic_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.topic_cursor + i)
                .unwrap_or(self.topic.len());
        }
    }
}

/// Applies one step to a single field of a projection.
fn patch_field(
    fields: &mut WallClockFields,
    field: EditField,
    delta: i64,
) -> Result<(), ConvertError> {
    match field {
        EditField::Year => {
            fields.year = (fields.year as i64 + delta).clamp(1, 9999) as i16;
        }
        EditField::Month => fields.month = cycle(fields.month, 1, 12, delta),
        EditField::Day => {
            let last = days_in_month(fields.year, fields.month)?;
            fields.day = cycle(fields.day.min(last), 1, last, delta);
        }
        EditField::Hour => {
            let (hour12, meridiem) = to_12_hour(fields.hour);
            fields.hour = to_24_hour(cycle(hour12, 1, 12, delta), meridiem)?;
        }
        EditField::Minute => fields.minute = cycle(fields.minute, 0, 59, delta),
        EditField::Meridiem => {
            let (hour12, meridiem) = to_12_hour(fields.hour);
            fields.hour = to_24_hour(hour12, meridiem.toggled())?;
        }
    }
    Ok(())
}

/// Steps a value through an inclusive range, wrapping at both ends.
fn cycle(value: i8, min: i8, max: i8, delta: i64) -> i8 {
    let span = (max - min + 1) as i64;
    let offset = (value - min) as i64 + delta;
    (min as i64 + offset.rem_euclid(span)) as i8
}
