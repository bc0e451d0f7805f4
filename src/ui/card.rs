//! Card for a single meal.

use crate::meal::MealRecord;
use crate::ui::theme::{CARD_BORDER, CARD_INGREDIENTS, CARD_SUBTITLE, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Title, `category • area`, ingredient preview and the thumbnail URL
/// standing in for the image.
pub struct MealCard<'a> {
    meal: &'a MealRecord,
}

impl<'a> MealCard<'a> {
    pub fn new(meal: &'a MealRecord) -> Self {
        Self { meal }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let meal = self.meal;
        vec![
            Line::from(Span::styled(
                meal.subtitle(),
                Style::default().fg(CARD_SUBTITLE),
            )),
            Line::from(Span::styled(
                meal.ingredient_preview(),
                Style::default()
                    .fg(CARD_INGREDIENTS)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                meal.thumbnail.as_deref().unwrap_or(""),
                Style::default()
                    .fg(HEADER_SEPARATOR)
                    .add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Widget for MealCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(Span::styled(
            format!(" {} ", self.meal.title()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER))
            .title(title);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
