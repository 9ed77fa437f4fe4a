//! Placeholder rows shown while the list is being populated.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Number of placeholder rows drawn.
pub const SKELETON_ROWS: usize = 6;

const FILL: &str = "░";

/// Uniform placeholder rows, one per line from the top of the area.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    style: Style,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Skeleton {
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Skeleton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let rows = (SKELETON_ROWS as u16).min(area.height);
        let fill = FILL.repeat(area.width as usize);

        for y in area.y..area.y + rows {
            buf.set_string(area.x, y, &fill, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_drawn(width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Skeleton::default().render(area, &mut buf);

        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_draws_six_full_rows() {
        let rows = rows_drawn(12, 10);
        let filled: Vec<_> = rows.iter().filter(|r| r.contains('░')).collect();

        assert_eq!(filled.len(), SKELETON_ROWS);
        assert!(filled.iter().all(|r| r.chars().all(|c| c == '░')));
        assert!(rows[SKELETON_ROWS..].iter().all(|r| r.trim().is_empty()));
    }

    #[test]
    fn test_clips_to_short_area() {
        let rows = rows_drawn(5, 3);
        assert_eq!(rows.iter().filter(|r| r.contains('░')).count(), 3);
    }

    #[test]
    fn test_empty_area() {
        let rows = rows_drawn(0, 0);
        assert!(rows.is_empty());
    }
}
