//! Vertically scrolled stack of meal cards.

use crate::meal::MealRecord;
use crate::ui::card::MealCard;
use crate::ui::layout::CARD_HEIGHT;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

pub struct MealList<'a> {
    items: &'a [MealRecord],
    offset: usize,
}

impl<'a> MealList<'a> {
    pub fn new(items: &'a [MealRecord], offset: usize) -> Self {
        Self { items, offset }
    }

    /// Card rectangles for the visible slice, top to bottom. Only whole
    /// cards are laid out.
    pub fn slots(&self, area: Rect) -> Vec<(Rect, &'a MealRecord)> {
        let start = self.offset.min(self.items.len());
        let mut slots = Vec::new();
        let mut y = area.y;
        for meal in &self.items[start..] {
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            slots.push((Rect::new(area.x, y, area.width, CARD_HEIGHT), meal));
            y += CARD_HEIGHT;
        }
        slots
    }
}

impl Widget for MealList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (slot, meal) in self.slots(area) {
            MealCard::new(meal).render(slot, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meals(count: usize) -> Vec<MealRecord> {
        (0..count)
            .map(|i| MealRecord {
                name: Some(format!("meal {i}")),
                ..MealRecord::default()
            })
            .collect()
    }

    #[test]
    fn slots_fit_whole_cards_only() {
        let items = meals(10);
        let list = MealList::new(&items, 0);
        let slots = list.slots(Rect::new(0, 3, 40, 12));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].0, Rect::new(0, 3, 40, CARD_HEIGHT));
        assert_eq!(slots[1].0.y, 3 + CARD_HEIGHT);
    }

    #[test]
    fn slots_start_at_offset() {
        let items = meals(4);
        let list = MealList::new(&items, 3);
        let slots = list.slots(Rect::new(0, 0, 40, 50));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].1.title(), "meal 3");
    }

    #[test]
    fn offset_past_end_renders_nothing() {
        let items = meals(2);
        let list = MealList::new(&items, 9);
        assert!(list.slots(Rect::new(0, 0, 40, 50)).is_empty());
    }
}
