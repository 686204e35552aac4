use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{AppMode, PlanApp};

pub fn handle_event(app: &mut PlanApp, event: Event) {
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
}

fn handle_key(app: &mut PlanApp, key: KeyEvent) {
    match app.mode {
        AppMode::Normal => handle_normal_key(app, key),
        AppMode::ZonePicker => handle_picker_key(app, key),
        AppMode::BriefForm => handle_form_key(app, key),
        AppMode::Loading => handle_loading_key(app, key),
        AppMode::BriefResult => handle_result_key(app, key),
    }
}

fn handle_normal_key(app: &mut PlanApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            app.switch_card();
        }
        KeyCode::Left => {
            app.field_left();
        }
        KeyCode::Right => {
            app.field_right();
        }
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_field(1);
        }
        KeyCode::Down | KeyCode::Char('-') => {
            app.adjust_field(-1);
        }
        KeyCode::Char('z') => {
            app.open_zone_picker();
        }
        KeyCode::Char('b') => {
            app.open_brief_form();
        }
        KeyCode::Char('r') => {
            app.reset_to_next_hour();
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut PlanApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Enter => app.picker_select(),
        KeyCode::Up => app.picker_up(),
        KeyCode::Down => app.picker_down(),
        _ => {}
    }
}

fn handle_form_key(app: &mut PlanApp, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => app.close_popup(),
        (KeyCode::Enter, _) => app.send_brief(),
        (KeyCode::Up, _) => app.duration_up(),
        (KeyCode::Down, _) => app.duration_down(),
        (KeyCode::Backspace, _) => app.topic_backspace(),
        (KeyCode::Left, _) => app.topic_left(),
        (KeyCode::Right, _) => app.topic_right(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => app.topic_char(c),
        _ => {}
    }
}

fn handle_loading_key(app: &mut PlanApp, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.cancel_brief();
    }
}

fn handle_result_key(app: &mut PlanApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_popup(),
        _ => {}
    }
}
