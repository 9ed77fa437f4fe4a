//! Snapshot tests for rendering.
//!
//! These tests render to a test buffer and compare against saved snapshots.
//! Any visual change requires explicit approval with `cargo insta review`.

use insta::assert_snapshot;
use ratatui::{backend::TestBackend, Terminal};
use sample_list::config::Config;
use sample_list::data::{format_table, FormatOptions, Record};
use sample_list::tui::ui::render;
use sample_list::tui::App;

/// Render the app to a string for snapshot comparison.
fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            app.resize(frame.area());
            render(app, frame);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = &buffer[(x, y)];
            output.push_str(cell.symbol());
        }
        output.push('\n');
    }

    output
}

#[test]
fn test_loading_screen_snapshot() {
    let mut app = App::from_config(&Config::default());
    let output = render_to_string(&mut app, 42, 14);
    assert_snapshot!("loading_screen", output);
}

#[test]
fn test_record_table_snapshot() {
    let records = vec![
        Record::new("Small Wooden Chair", "Dolor sit amet.", "12.50"),
        Record::new("Sleek Steel Car", "Quia nemo ut enim ad.", "999.99"),
    ];
    let output = format_table(&records, &FormatOptions::default());
    assert_snapshot!("record_table", output);
}
