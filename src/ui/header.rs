use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use crate::ui::view::ScreenBranch;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, branch: &ScreenBranch<'_>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let status = match branch {
            ScreenBranch::Loading => Span::styled("loading…", text_style),
            ScreenBranch::List(items) => Span::styled(
                format!("{} meals", items.len()),
                Style::default().fg(STATUS_OK),
            ),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Meals", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled("TheMealDB", text_style),
            Span::styled("  │  ", separator_style),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
