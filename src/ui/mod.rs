pub mod app;
mod detail;
mod directory;
mod modal;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::core::Route;
pub use app::{App, AppEvent};

/// Run the draw/poll loop until the user quits. Owns the terminal for its
/// whole lifetime and restores it on every exit path.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    app.open_directory();

    let tick_rate = Duration::from_millis(250);
    while !app.should_quit {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        while let Some(event) = app.poll_event() {
            app.handle_event(event);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    match app.route {
        Route::Directory => directory::draw(f, &app.directory),
        Route::UserDetails { .. } => {
            if let Some(detail) = &app.detail {
                detail::draw(f, detail);
                if let Some(post) = &detail.modal {
                    modal::draw(f, post);
                }
            }
        }
    }
}
