//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::{App, Mode};
use super::ui;

/// Lines scrolled per mouse wheel notch.
const WHEEL_LINES: isize = 3;

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            // The next draw picks up the new size
            _ => {}
        }
        return Ok(true);
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.page(false),
        KeyCode::PageDown => app.page(true),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),

        // Controls
        KeyCode::Char('t') => {
            app.press_scroll_button();
        }
        KeyCode::Char('a') | KeyCode::Char('+') => app.add_item(),

        // Help
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

/// Handle a single mouse event against the last known screen layout.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Normal {
        return;
    }

    let areas = ui::layout(app.screen);

    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_LINES),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_LINES),
        MouseEventKind::Down(MouseButton::Left) => {
            let (column, row) = (mouse.column, mouse.row);

            if app.scroll_button_visible
                && ui::hit(ui::scroll_button_area(areas.list_inner), column, row)
            {
                app.press_scroll_button();
            } else if ui::hit(areas.add_button, column, row) {
                app.add_item();
            }
        }
        _ => {}
    }
}
