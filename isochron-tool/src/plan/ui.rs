use jiff::tz::TimeZone;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use isochron_core::{
    COMMON_TIMEZONES, ConvertError, Countdown, REFERENCE_ZONES, ZoneRole, clock_12h,
    clock_seconds, lookup, meridiem_label, offset_label, resolve_zone, to_12_hour, to_wall_clock,
    weekday_date, zone_abbreviation,
};

use super::app::{AppMode, EditField, PlanApp};

pub fn render(frame: &mut Frame, app: &PlanApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(4), // Reference strip
            Constraint::Min(9),    // Meeting cards
            Constraint::Length(5), // Selected-time summary
            Constraint::Length(4), // Live footer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_reference_strip(frame, app, chunks[1]);
    render_cards(frame, app, chunks[2]);
    render_summary(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[5]);

    // Render popup if active
    match app.mode {
        AppMode::ZonePicker => render_zone_popup(frame, app),
        AppMode::BriefForm => render_brief_form(frame, app),
        AppMode::Loading => render_loading(frame),
        AppMode::BriefResult => render_brief_result(frame, app),
        AppMode::Normal => {}
    }
}

// Zone ids held by the app were validated on entry, so these fallbacks are
// effectively unreachable; degrade instead of panicking mid-draw.
fn zone_or_utc(id: &str) -> TimeZone {
    resolve_zone(id).unwrap_or(TimeZone::UTC)
}

fn or_placeholder(text: Result<String, ConvertError>) -> String {
    text.unwrap_or_else(|_| "--:--".to_string())
}

fn render_header(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let title = format!(
        "isn plan - {} / {}",
        app.meeting.zone(ZoneRole::User),
        app.meeting.zone(ZoneRole::Counterpart)
    );

    let header =
        Paragraph::new(title).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn render_reference_strip(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let colors = [Color::Magenta, Color::Blue, Color::Cyan, Color::Yellow];
    let instant = app.meeting.instant();

    for (i, reference) in REFERENCE_ZONES.iter().enumerate() {
        let zone = zone_or_utc(reference.id);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    or_placeholder(clock_12h(instant, &zone)),
                    Style::default().fg(colors[i]).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", or_placeholder(weekday_date(instant, &zone))),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(
                offset_label(&zone, instant),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} · {}", reference.label, reference.region));

        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), slots[i]);
    }
}

fn render_cards(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(frame, app, halves[0], ZoneRole::User, "Your Location", Color::Blue);
    render_card(
        frame,
        app,
        halves[1],
        ZoneRole::Counterpart,
        "Counterpart Location",
        Color::Green,
    );
}

fn render_card(
    frame: &mut Frame,
    app: &PlanApp,
    area: Rect,
    role: ZoneRole,
    title: &str,
    color: Color,
) {
    let id = app.meeting.zone(role);
    let zone = zone_or_utc(id);
    let instant = app.meeting.instant();
    let focused = app.focused_card == role;

    let name = lookup(id).map(|z| z.name).unwrap_or(id);

    let border_style = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!("{} · {}", zone_abbreviation(&zone, instant), offset_label(&zone, instant)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            or_placeholder(clock_12h(instant, &zone)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(or_placeholder(weekday_date(instant, &zone))),
        Line::from(""),
        field_editor_line(app, &zone, focused),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

/// One line of editable wall-clock segments, the focused one highlighted.
fn field_editor_line(app: &PlanApp, zone: &TimeZone, focused: bool) -> Line<'static> {
    let fields = to_wall_clock(app.meeting.instant(), zone);
    let (hour12, meridiem) = to_12_hour(fields.hour);

    let segments: [(EditField, String, &str); 6] = [
        (EditField::Year, format!("{:04}", fields.year), "-"),
        (EditField::Month, format!("{:02}", fields.month), "-"),
        (EditField::Day, format!("{:02}", fields.day), "  "),
        (EditField::Hour, format!("{:02}", hour12), ":"),
        (EditField::Minute, format!("{:02}", fields.minute), " "),
        (EditField::Meridiem, meridiem.label().to_string(), ""),
    ];

    let mut spans = Vec::new();
    for (field, text, separator) in segments {
        let style = if focused && app.focused_field == field {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(separator));
    }

    Line::from(spans)
}

fn render_summary(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let instant = app.meeting.instant();
    let rows = [
        ("Your time", app.meeting.zone(ZoneRole::User)),
        ("Counterpart", app.meeting.zone(ZoneRole::Counterpart)),
        ("Reference", app.meeting.zone(ZoneRole::Reference)),
    ];

    let mut lines = Vec::new();
    for (label, id) in rows {
        let zone = zone_or_utc(id);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{:>8}  {}",
                    or_placeholder(clock_12h(instant, &zone)),
                    or_placeholder(weekday_date(instant, &zone)),
                ),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({id})"), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let block = Block::default().borders(Borders::ALL).title("Selected Time");
    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_footer(frame: &mut Frame, app: &PlanApp, area: Rect) {
    let reference_id = app.meeting.zone(ZoneRole::Reference);
    let zone = zone_or_utc(reference_id);
    let label = REFERENCE_ZONES
        .iter()
        .find(|r| r.id == reference_id)
        .map(|r| r.label)
        .unwrap_or(reference_id);

    let clock_line = Line::from(vec![
        Span::raw(format!("Current time ({}) ", label)),
        Span::styled(
            format!(
                "{} {}",
                or_placeholder(clock_seconds(app.now, &zone)),
                or_placeholder(meridiem_label(app.now, &zone)),
            ),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);

    let countdown = Countdown::between(app.now, app.meeting.instant());
    let countdown_line = if countdown.is_pending() {
        Line::from(vec![
            Span::raw("Time until meeting: "),
            Span::styled(
                countdown.to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(countdown.to_string(), Style::default().fg(Color::DarkGray)))
    };

    let block = Block::default().borders(Borders::ALL).title("Live");
    frame.render_widget(
        Paragraph::new(Text::from(vec![clock_line, countdown_line])).block(block),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, app: &PlanApp, area: Rect) {
    if let Some(ref error) = app.last_error {
        let bar =
            Paragraph::new(format!("Error: {}", error)).style(Style::default().fg(Color::Red));
        frame.render_widget(bar, area);
        return;
    }

    let status = match app.mode {
        AppMode::Normal => {
            "Tab: Card  ←/→: Field  ↑/↓: Adjust  z: Zone  b: Brief  r: Next hour  q: Quit"
        }
        AppMode::ZonePicker => "↑/↓: Navigate  Enter: Select  Esc: Cancel",
        AppMode::BriefForm => "Type topic  ↑/↓: Duration  Enter: Generate  Esc: Back",
        AppMode::Loading => "Generating brief...  Esc: Cancel",
        AppMode::BriefResult => "Esc: Close",
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}

fn render_zone_popup(frame: &mut Frame, app: &PlanApp) {
    let current = app.meeting.zone(app.focused_card);
    let instant = app.meeting.instant();

    let items: Vec<ListItem> = COMMON_TIMEZONES
        .iter()
        .map(|entry| {
            let zone = zone_or_utc(entry.id);
            let is_current = entry.id == current;
            let style = if is_current {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            let marker = if is_current { " ✓" } else { "" };
            ListItem::new(format!(
                "{:<34} {:>5}  {}{}",
                entry.name,
                zone_abbreviation(&zone, instant),
                offset_label(&zone, instant),
                marker
            ))
            .style(style)
        })
        .collect();

    render_popup(frame, "Select Time Zone", items, app.picker_selected);
}

fn render_brief_form(frame: &mut Frame, app: &PlanApp) {
    let area = centered_rect(60, 30, frame.area());

    frame.render_widget(Clear, area);

    let topic_span = if app.topic.is_empty() {
        Span::styled("What is the meeting about?", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.topic.clone())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Topic: ", Style::default().add_modifier(Modifier::BOLD)),
            topic_span,
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{} minutes", app.duration_minutes)),
        ]),
    ];

    let block = Block::default().borders(Borders::ALL).title("Meeting Brief");
    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: false }),
        area,
    );

    // Put the cursor inside the topic input
    let cursor_x = area.x + 1 + "Topic: ".len() as u16 + app.topic_cursor as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn render_loading(frame: &mut Frame) {
    let area = centered_rect(44, 16, frame.area());

    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Consulting the scheduling assistant...",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
    )))
    .block(Block::default().borders(Borders::ALL).title("Working"));

    frame.render_widget(paragraph, area);
}

fn render_brief_result(frame: &mut Frame, app: &PlanApp) {
    let area = centered_rect(70, 70, frame.area());

    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(Span::styled(
        "Agenda",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))];

    if let Some(ref brief) = app.brief {
        for line in brief.agenda.lines() {
            lines.push(Line::from(format!("  {}", line)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Etiquette",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for line in brief.etiquette_tip.lines() {
            lines.push(Line::from(format!("  {}", line)));
        }
    }

    if let Some(ref error) = app.last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Note: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title("Meeting Brief");
    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_popup(frame: &mut Frame, title: &str, items: Vec<ListItem>, selected: usize) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
