//! TUI module hosting the sample list widget.

pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::error::Result;

pub use app::App;

/// Poll interval when nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal and run the list until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mouse = config.tui.mouse_capture;
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let mut app = App::from_config(config);

    let mut terminal = setup_terminal(mouse)?;
    let result = run_app(&mut terminal, &mut app, tick_rate);
    restore_terminal(&mut terminal, mouse)?;

    result
}

/// Drive the app: draw, populate once after the first frame, then react to events.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.resize(frame.area());
            ui::render(app, frame);
        })?;

        // Deferred so the skeleton is on screen while records are generated
        if app.loading {
            app.populate();
            continue;
        }

        if app.should_quit {
            tracing::debug!("Quit requested");
            return Ok(());
        }

        let timeout = if app.is_animating() {
            tick_rate
        } else {
            IDLE_POLL
        };
        event::handle_events(app, timeout)?;
        app.tick();
    }
}

fn setup_terminal(mouse: bool) -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    let entered = if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    };
    if let Err(e) = entered {
        let _ = disable_raw_mode();
        return Err(e);
    }

    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()
}
