pub mod app;
pub mod data;
pub mod logging;
pub mod styles;
pub mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use data_organizer::{models::settings::Settings, services::organizer_service::OrganizerService};
use log::info;

use std::{
    fs, io,
    sync::Arc,
    time::{Duration, Instant},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use ui::{ui_error_message::draw_error_popup, ui_organizer::draw_organizer_view};

pub fn load_settings(settings_path: Option<&str>) -> Result<Settings> {
    match settings_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Unable to read settings file {}", path))?;
            Settings::from_json(&json)
        }
        None => Ok(Settings::default()),
    }
}

pub fn run(settings_path: Option<String>) -> Result<()> {
    let settings = load_settings(settings_path.as_deref())?;
    logging::set_up_logging(settings.log_file.as_deref())?;
    info!("Starting with {:?}", settings);

    let organizer = Arc::new(OrganizerService::new(settings));

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let tick_rate = Duration::from_millis(150);
    let app = App::new(organizer);
    let res = run_app(&mut terminal, app, tick_rate);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if crossterm::event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    (_, KeyCode::Char('q')) => return Ok(()),
                    _ => app.handle_input(key),
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn ui<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    draw_organizer_view(f, app);

    if app.show_error_message {
        draw_error_popup(f, app)
    }
}
