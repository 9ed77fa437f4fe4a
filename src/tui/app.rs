//! Application state for the TUI.

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::{Config, ListConfig};
use crate::data::{FakeGenerator, Generator, Record};

use super::ui;

/// Each animation tick covers this fraction (1/n) of the remaining distance.
const SCROLL_EASE_DIVISOR: usize = 4;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal list interaction.
    Normal,
    /// Help overlay mode.
    Help,
}

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScrollAnimation {
    target: usize,
}

/// Main application state for the TUI.
pub struct App {
    /// Records in display order, newest additions first.
    pub records: VecDeque<Record>,

    /// True until the initial population completes.
    pub loading: bool,

    /// Whether the "Scroll to Top" control is shown.
    pub scroll_button_visible: bool,

    /// Current vertical scroll offset in lines.
    pub scroll_offset: usize,

    /// Number of lines the list container can show.
    pub viewport_rows: usize,

    /// Last known terminal area.
    pub screen: Rect,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    /// List behavior settings.
    pub settings: ListConfig,

    /// Animate scroll-to-top.
    pub smooth_scroll: bool,

    animation: Option<ScrollAnimation>,
    generator: Box<dyn Generator>,
}

impl App {
    /// Create a new App instance with the given data source.
    pub fn new(config: &Config, generator: Box<dyn Generator>) -> Self {
        Self {
            records: VecDeque::new(),
            loading: true,
            scroll_button_visible: false,
            scroll_offset: 0,
            viewport_rows: 0,
            screen: Rect::default(),
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            settings: config.list.clone(),
            smooth_scroll: config.tui.smooth_scroll,
            animation: None,
            generator,
        }
    }

    /// Create an App backed by the faker generator, seeded from config.
    pub fn from_config(config: &Config) -> Self {
        let generator = FakeGenerator::from_seed_opt(config.list.seed);
        Self::new(config, Box::new(generator))
    }

    /// Generate the initial batch of records. Runs once per App.
    pub fn populate(&mut self) {
        if !self.loading {
            tracing::debug!("Population already done, skipping");
            return;
        }

        let count = self.settings.initial_count;
        tracing::info!(count, "Populating list");
        let started = Instant::now();

        self.records = self.generator.records(count).into();
        self.loading = false;

        tracing::info!(
            count = self.records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Population complete"
        );
    }

    /// Generate one record and put it in front of all others.
    ///
    /// Ignored while the initial population is pending.
    pub fn add_item(&mut self) {
        if self.loading {
            tracing::debug!("Add item ignored while loading");
            return;
        }

        let record = self.generator.record();
        tracing::debug!(name = %record.name, "Adding item");
        self.status_message = Some(format!("Added \"{}\"", record.name));
        self.records.push_front(record);
    }

    /// Scroll notification from the list container.
    pub fn handle_scroll(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scroll_button_visible = offset > self.settings.scroll_threshold;
    }

    /// Total height of the list content, in lines.
    pub fn content_height(&self) -> usize {
        self.records.len() * self.settings.row_height
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_rows)
    }

    /// Move the viewport by `delta` lines. Cancels any animation.
    pub fn scroll_by(&mut self, delta: isize) {
        self.animation = None;
        self.set_offset(self.scroll_offset.saturating_add_signed(delta));
    }

    /// Scroll by one viewport in the given direction.
    pub fn page(&mut self, down: bool) {
        let rows = self.viewport_rows.max(1) as isize;
        self.scroll_by(if down { rows } else { -rows });
    }

    /// Jump instantly to the first line.
    pub fn jump_to_top(&mut self) {
        self.animation = None;
        self.set_offset(0);
    }

    /// Jump instantly to the last full page.
    pub fn jump_to_bottom(&mut self) {
        self.animation = None;
        self.set_offset(self.max_offset());
    }

    /// Bring the list back to offset 0, animated when smooth scrolling is on.
    pub fn scroll_to_top(&mut self) {
        tracing::debug!(from = self.scroll_offset, "Scrolling to top");
        if self.smooth_scroll && self.scroll_offset > 0 {
            self.animation = Some(ScrollAnimation { target: 0 });
        } else {
            self.jump_to_top();
        }
    }

    /// Activate the "Scroll to Top" control. Only works while it is shown.
    pub fn press_scroll_button(&mut self) -> bool {
        if self.scroll_button_visible {
            self.scroll_to_top();
            true
        } else {
            false
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the smooth scroll animation by one step.
    pub fn tick(&mut self) {
        let Some(ScrollAnimation { target }) = self.animation else {
            return;
        };

        let current = self.scroll_offset;
        let distance = current.abs_diff(target);
        if distance == 0 {
            self.animation = None;
            return;
        }

        let step = (distance / SCROLL_EASE_DIVISOR).max(1);
        let next = if current > target {
            current - step
        } else {
            current + step
        };
        self.set_offset(next);

        if self.scroll_offset == target || self.scroll_offset == current {
            self.animation = None;
        }
    }

    /// Record a new terminal size and clamp the offset to it.
    pub fn resize(&mut self, area: Rect) {
        self.screen = area;
        self.viewport_rows = ui::layout(area).list_inner.height as usize;
        if self.scroll_offset > self.max_offset() {
            self.set_offset(self.max_offset());
        }
    }

    fn set_offset(&mut self, offset: usize) {
        self.handle_scroll(offset.min(self.max_offset()));
    }
}
