mod app;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use isochron_briefing::BriefingClient;
use ratatui::prelude::*;

pub use app::PlanApp;

use crate::error::IsnError;

/// Cadence of the footer clock and countdown refresh.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub async fn run(
    user_zone: String,
    counterpart_zone: String,
    reference_zone: String,
    client: Option<BriefingClient>,
) -> Result<(), IsnError> {
    // Validate zones before touching the terminal
    let mut app = PlanApp::new(user_zone, counterpart_zone, reference_zone, client)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut PlanApp,
) -> Result<(), IsnError> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events, waking in time for the next clock tick
        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.on_tick();
            last_tick = Instant::now();
        }

        // Check for async brief responses
        app.poll_brief();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
