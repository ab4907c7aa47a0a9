//! Interactive listing view.

pub mod app;
pub mod event;
pub mod ui;
pub mod view;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use app::App;
pub use view::ListingView;

const TICK: Duration = Duration::from_millis(250);

/// Run the TUI until the user quits, listing `initial` first if given.
pub fn run(mut app: App, initial: Option<PathBuf>) -> io::Result<()> {
    if let Some(path) = initial {
        app.select_folder(path);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, TICK)?;
    }
    Ok(())
}
