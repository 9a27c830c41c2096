//! Terminal entry point.
//!
//! # Responsibility
//! - Bootstrap logging, set up the terminal, run the synchronous event
//!   loop, and always restore the terminal on the way out.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

mod app;
mod input;
mod render;

use app::App;

const TICK_INTERVAL: Duration = Duration::from_millis(150);

fn main() {
    let log_dir = std::env::temp_dir().join("starbook-logs");
    if let Err(err) = starbook_core::init_logging(&log_dir) {
        // The session still works without logs; raw mode just leaves no
        // other place to report the failure later.
        eprintln!("starbook: logging unavailable: {err}");
    }
    info!(
        "event=app_start module=tui status=ok version={}",
        starbook_core::core_version()
    );

    if let Err(err) = run() {
        eprintln!("starbook: {err}");
        std::process::exit(1);
    }
    info!("event=app_exit module=tui status=ok");
}

fn run() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = event_loop(&mut terminal, &mut app);

    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render::draw(frame, app))?;

        // The load happens after the first frame so the loading page is
        // observable before any filesystem work.
        app.tick(chrono::Local::now().date_naive());

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
