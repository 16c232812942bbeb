//! # TitleBar Component
//!
//! Single-line status bar above the list: which category is showing, the
//! host it comes from, and where the fetch stands.
//!
//! 1. **Loading**: `"Little Lemon · Salads (example.com) | Loading…"`
//! 2. **Loaded**: `"Little Lemon · Salads (example.com) | 2 items"`
//! 3. **Failed**: `"Little Lemon · Salads (example.com) | Menu unavailable: network error: …"`
//!
//! A failed fetch still leaves the list empty; this bar is where the user
//! learns why.

use crate::core::state::Phase;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar. All fields are props.
pub struct TitleBar<'a> {
    pub category: &'a str,
    pub source: &'a str,
    pub status_message: &'a str,
    pub phase: &'a Phase,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        category: &'a str,
        source: &'a str,
        status_message: &'a str,
        phase: &'a Phase,
    ) -> Self {
        Self {
            category,
            source,
            status_message,
            phase,
        }
    }

    fn status_style(&self) -> Style {
        match self.phase {
            Phase::Loading => Style::default().fg(Color::Yellow),
            Phase::Loaded => Style::default().fg(Color::Green),
            Phase::Failed(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled("Little Lemon", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" · "),
            Span::raw(self.category),
        ];
        if !self.source.is_empty() {
            spans.push(Span::styled(
                format!(" ({})", self.source),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message, self.status_style()));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
