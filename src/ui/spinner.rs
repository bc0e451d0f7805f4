//! Indeterminate loading indicator.

use crate::ui::layout::centered_row;
use crate::ui::theme::{ACCENT, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_LABEL: &str = "Loading meals";

/// Spinner centred in whatever area it is given.
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    pub fn frame_count() -> usize {
        FRAMES.len()
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let glyph = FRAMES[self.frame % FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(glyph, Style::default().fg(ACCENT)),
            Span::styled(format!(" {LOADING_LABEL}"), Style::default().fg(HEADER_TEXT)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered_row(area), buf);
    }
}
