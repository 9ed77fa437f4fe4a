//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::app::{App, Mode};
use super::widgets::Skeleton;
use crate::data::Record;

pub const TITLE: &str = "Virtualized List";
pub const ADD_BUTTON_LABEL: &str = "[ Add New Item ]";
pub const SCROLL_BUTTON_LABEL: &str = "[ Scroll to Top ]";
pub const LOADING_MESSAGE: &str = "Generating sample records...";

/// Width of the price column.
const PRICE_WIDTH: u16 = 12;

/// Screen regions shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub add_button: Rect,
    pub table_header: Rect,
    pub list: Rect,
    pub list_inner: Rect,
    pub footer: Rect,
}

/// Split the terminal area into the widget's regions.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Column headers
            Constraint::Min(3),    // List container
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header_inner = Block::default().borders(Borders::ALL).inner(chunks[0]);
    let header_cols = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(ADD_BUTTON_LABEL.chars().count() as u16),
    ])
    .split(header_inner);

    let list_inner = Block::default().borders(Borders::ALL).inner(chunks[2]);

    // Column headers line up with the list's inner area
    let table_header = Rect {
        x: list_inner.x,
        y: chunks[1].y,
        width: list_inner.width,
        height: chunks[1].height,
    };

    ScreenLayout {
        header: chunks[0],
        add_button: Rect {
            height: header_cols[1].height.min(1),
            ..header_cols[1]
        },
        table_header,
        list: chunks[2],
        list_inner,
        footer: chunks[3],
    }
}

/// Where the "Scroll to Top" button sits: bottom-right of the list.
pub fn scroll_button_area(list_inner: Rect) -> Rect {
    let width = (SCROLL_BUTTON_LABEL.chars().count() as u16).min(list_inner.width);
    Rect {
        x: list_inner.right().saturating_sub(width + 1).max(list_inner.x),
        y: list_inner.bottom().saturating_sub(1),
        width,
        height: 1.min(list_inner.height),
    }
}

/// Whether a terminal cell falls inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let areas = layout(frame.area());

    render_header(app, frame, &areas);
    render_table_header(frame, areas.table_header);
    render_list(app, frame, &areas);
    render_footer(app, frame, areas.footer);

    if app.scroll_button_visible {
        render_scroll_button(frame, areas.list_inner);
    }

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, areas: &ScreenLayout) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let title = Paragraph::new(format!(" {}", TITLE))
        .block(block)
        .style(Style::default().fg(Color::White).bold());
    frame.render_widget(title, areas.header);

    let button_style = if app.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(ADD_BUTTON_LABEL).style(button_style),
        areas.add_button,
    );
}

fn columns(area: Rect) -> [Rect; 3] {
    let cols = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Length(PRICE_WIDTH),
    ])
    .split(area);
    [cols[0], cols[1], cols[2]]
}

fn render_table_header(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::Yellow).bold();
    let [item, description, price] = columns(area);

    frame.render_widget(Paragraph::new(" Item").style(style), item);
    frame.render_widget(Paragraph::new("Description").style(style), description);
    frame.render_widget(
        Paragraph::new("Price ")
            .style(style)
            .alignment(Alignment::Right),
        price,
    );
}

fn render_list(app: &App, frame: &mut Frame, areas: &ScreenLayout) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.loading {
        frame.render_widget(block, areas.list);
        frame.render_widget(Skeleton::default(), areas.list_inner);
        return;
    }

    block = block.title(format!(" {} items ", app.records.len()));
    frame.render_widget(block, areas.list);

    let inner = areas.list_inner;
    let row_height = app.settings.row_height.max(1);

    for y in 0..inner.height {
        let line = app.scroll_offset + y as usize;
        let index = line / row_height;
        let Some(record) = app.records.get(index) else {
            break;
        };
        if line % row_height != 0 {
            continue;
        }

        let row = Rect::new(inner.x, inner.y + y, inner.width, 1);
        render_row(frame, record, &app.settings.currency_symbol, index, row);
    }

    let mut scrollbar_state = ScrollbarState::new(app.max_offset())
        .position(app.scroll_offset)
        .viewport_content_length(app.viewport_rows);
    let scrollbar_area = Rect {
        y: areas.list.y + 1,
        height: areas.list.height.saturating_sub(2),
        ..areas.list
    };
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        scrollbar_area,
        &mut scrollbar_state,
    );
}

fn render_row(
    frame: &mut Frame,
    record: &Record,
    currency_symbol: &str,
    index: usize,
    area: Rect,
) {
    let [item, description, price] = columns(area);

    // Zebra striping
    let base = if index % 2 == 0 {
        Style::default()
    } else {
        Style::default().bg(Color::Rgb(30, 30, 30))
    };

    frame.render_widget(
        Paragraph::new(Line::from(format!(" {}", record.name)))
            .style(base.fg(Color::White).bold()),
        item,
    );
    frame.render_widget(
        Paragraph::new(record.description.as_str()).style(base.fg(Color::Gray)),
        description,
    );
    frame.render_widget(
        Paragraph::new(format!("{} ", record.display_price(currency_symbol)))
            .style(base.fg(Color::Green))
            .alignment(Alignment::Right),
        price,
    );
}

fn render_scroll_button(frame: &mut Frame, list_inner: Rect) {
    let area = scroll_button_area(list_inner);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(SCROLL_BUTTON_LABEL).style(Style::default().fg(Color::Black).bg(Color::Cyan)),
        area,
    );
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal if app.scroll_button_visible => {
            "[↑↓] Scroll  [a] Add item  [t] Scroll to top  [?] Help  [q] Quit"
        }
        Mode::Normal => "[↑↓] Scroll  [a] Add item  [?] Help  [q] Quit",
        Mode::Help => "[Esc] Close",
    };

    let text = if app.loading {
        LOADING_MESSAGE
    } else {
        app.status_message.as_deref().unwrap_or(hints)
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 50u16.min(area.width.saturating_sub(8));
    let help_height = 20u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 SCROLLING
 ─────────────────────────────────
 ↑/k        Scroll up
 ↓/j        Scroll down
 PgUp/PgDn  Scroll one page
 g/Home     Jump to top
 G/End      Jump to bottom
 t          Scroll to top (when shown)

 ACTIONS
 ─────────────────────────────────
 a/+        Add new item
 ?          Toggle this help
 q/Esc      Quit

 Mouse: wheel scrolls, click buttons
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;

    fn test_app(count: usize) -> App {
        let mut config = Config::default();
        config.list.initial_count = count;
        config.list.seed = Some(5);
        App::from_config(&config)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
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
                output.push_str(buffer[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_render_loading_shows_skeleton_only() {
        let mut app = test_app(50);
        let output = draw(&mut app, 80, 24);

        let skeleton_lines = output.lines().filter(|l| l.contains('░')).count();
        assert_eq!(skeleton_lines, crate::tui::widgets::SKELETON_ROWS);
        assert!(!output.contains('€'));
        assert!(output.contains(TITLE));
    }

    #[test]
    fn test_render_loaded_shows_records() {
        let mut app = test_app(50);
        app.populate();
        let output = draw(&mut app, 140, 24);

        assert!(!output.contains('░'));
        assert!(output.contains(TITLE));
        assert!(output.contains(ADD_BUTTON_LABEL));
        assert!(output.contains("Item"));
        assert!(output.contains("Description"));
        assert!(output.contains("Price"));
        assert!(output.contains(&app.records[0].name));
        assert!(output.contains(&app.records[0].display_price("€")));
        assert!(output.contains("50 items"));
    }

    #[test]
    fn test_render_scroll_button_visibility() {
        let mut app = test_app(500);
        app.populate();

        let output = draw(&mut app, 80, 24);
        assert!(!output.contains("Scroll to Top"));

        app.handle_scroll(150);
        let output = draw(&mut app, 80, 24);
        assert!(output.contains("Scroll to Top"));
    }

    #[test]
    fn test_render_scrolled_rows() {
        let mut app = test_app(500);
        app.populate();
        app.handle_scroll(200);
        let output = draw(&mut app, 140, 24);

        assert!(output.contains(&app.records[200].name));
        assert!(output.contains(&app.records[200].display_price("€")));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut app = test_app(10);
        app.mode = Mode::Help;
        let output = draw(&mut app, 80, 30);
        assert!(output.contains("Help"));
        assert!(output.contains("Add new item"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = test_app(10);
        app.populate();
        app.handle_scroll(150);
        draw(&mut app, 10, 5);
    }

    #[test]
    fn test_layout_regions() {
        let areas = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.list_inner.height, 17);
        assert_eq!(areas.add_button.width, ADD_BUTTON_LABEL.chars().count() as u16);
        assert_eq!(areas.add_button.right(), areas.header.right() - 1);
        assert_eq!(areas.table_header.x, areas.list_inner.x);
    }

    #[test]
    fn test_scroll_button_area_inside_list() {
        let inner = layout(Rect::new(0, 0, 80, 24)).list_inner;
        let button = scroll_button_area(inner);
        assert!(hit(inner, button.x, button.y));
        assert!(hit(inner, button.right() - 1, button.y));
        assert_eq!(button.y, inner.bottom() - 1);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(hit(rect, 10, 5));
        assert!(hit(rect, 13, 6));
        assert!(!hit(rect, 14, 5));
        assert!(!hit(rect, 10, 7));
        assert!(!hit(rect, 9, 5));
    }
}
