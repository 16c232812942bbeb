//! # MenuList Component
//!
//! Scrollable list of menu item names.
//!
//! `MenuList` is a transient component (created each frame) wrapping the
//! persistent `&'a mut MenuListState` and the items to show. It is a pure
//! function of its input: one row per name, in order, and nothing at all
//! for an empty list.
//!
//! ```text
//! ┌────────────────────────────┐
//! │                            │  ┐
//! │ Greek Salad                │  │ ROW_HEIGHT, name on the middle line
//! │                            │  ┘
//! │                            │
//! │ Caesar Salad               │
//! │                            │
//! └────────────────────────────┘
//! ```

use log::warn;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Height of one row in terminal lines.
pub const ROW_HEIGHT: u16 = 3;

/// Rows that fit on a `u16`-tall canvas. Items past this are not drawn.
pub const MAX_ROWS: usize = (u16::MAX / ROW_HEIGHT) as usize;

/// Scroll state for the menu list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct MenuListState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Total height of all rows at the last render
    pub content_height: u16,
    /// Set once the row limit has been reported, so it is logged only once
    pub truncation_reported: bool,
}

impl MenuListState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn set_y(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset().y;
        if current > self.max_offset() {
            self.set_y(current);
        }
    }

    /// Scrolls by whole rows.
    pub fn scroll_rows(&mut self, rows: i32) {
        let current = i32::from(self.scroll_state.offset().y);
        let target = current + rows * i32::from(ROW_HEIGHT);
        self.set_y(target.clamp(0, i32::from(u16::MAX)) as u16);
    }

    /// Scrolls by one viewport, keeping row boundaries aligned.
    pub fn scroll_pages(&mut self, pages: i32) {
        let rows_per_page = (self.viewport_height / ROW_HEIGHT).max(1);
        self.scroll_rows(pages * i32::from(rows_per_page));
    }
}

impl EventHandler for MenuListState {
    type Event = (); // The list emits nothing, it only scrolls

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_rows(-1),
            TuiEvent::ScrollDown => self.scroll_rows(1),
            TuiEvent::ScrollPageUp => self.scroll_pages(-1),
            TuiEvent::ScrollPageDown => self.scroll_pages(1),
            TuiEvent::ScrollToTop => self.set_y(0),
            TuiEvent::ScrollToBottom => self.set_y(self.max_offset()),
            _ => {}
        }
        None
    }
}

/// A single menu item, name vertically centered in its row.
pub struct MenuRow<'a> {
    name: &'a str,
}

impl<'a> MenuRow<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Widget for MenuRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let middle = Rect::new(area.x, area.y + (area.height - 1) / 2, area.width, 1);
        Paragraph::new(Line::raw(self.name))
            .block(Block::new().padding(Padding::horizontal(1)))
            .render(middle, buf);
    }
}

/// Scrollable menu view component.
/// Created fresh each frame with references to state and data.
pub struct MenuList<'a> {
    pub state: &'a mut MenuListState,
    pub items: &'a [String],
}

impl<'a> MenuList<'a> {
    pub fn new(state: &'a mut MenuListState, items: &'a [String]) -> Self {
        Self { state, items }
    }

    /// Number of rows drawn for `count` items, capped at `MAX_ROWS`.
    pub fn row_count(count: usize) -> usize {
        count.min(MAX_ROWS)
    }

    /// Total canvas height for `count` items.
    pub fn content_height(count: usize) -> u16 {
        Self::row_count(count) as u16 * ROW_HEIGHT
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;
        self.state.content_height = Self::content_height(self.items.len());
        self.state.clamp_scroll();

        if self.items.is_empty() {
            return;
        }

        let rows = Self::row_count(self.items.len());
        if rows < self.items.len() && !self.state.truncation_reported {
            warn!(
                "Menu has {} items, only the first {} are shown",
                self.items.len(),
                rows
            );
            self.state.truncation_reported = true;
        }

        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let mut scroll_view =
            ScrollView::new(Size::new(content_width, self.state.content_height))
                .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
                .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, name) in self.items.iter().take(rows).enumerate() {
            let row = Rect::new(0, i as u16 * ROW_HEIGHT, content_width, ROW_HEIGHT);
            scroll_view.render_widget(MenuRow::new(name), row);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
