use crate::meal::MealCollection;
use crate::ui::layout::{body_rect, cards_per_page};
use crate::ui::meals::{MealScreenIntent, MealScreenReducer, MealScreenState};
use crate::ui::mvi::Reducer;
use crate::ui::spinner::Spinner;
use crate::ui::view::{select_branch, ScreenBranch};
use ratatui::layout::Rect;
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Meal list state (MVI pattern).
    screen: MealScreenState,
    /// Set once the initial fetch has been triggered.
    mounted: bool,
    /// Index of the first visible card.
    scroll: usize,
    spinner_frame: usize,
    /// Terminal size in cells.
    size: Option<(u16, u16)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: MealScreenState::default(),
            mounted: false,
            scroll: 0,
            spinner_frame: 0,
            size: None,
        }
    }

    /// Run `fetch` the first time the screen is mounted. Later calls do
    /// nothing. Returns whether `fetch` ran.
    pub fn mount<F: FnOnce()>(&mut self, fetch: F) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        fetch();
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &MealScreenState {
        &self.screen
    }

    pub fn branch(&self) -> ScreenBranch<'_> {
        select_branch(&self.screen)
    }

    pub fn dispatch(&mut self, intent: MealScreenIntent) {
        dispatch_mvi!(self, screen, MealScreenReducer, intent);
        self.clamp_scroll();
    }

    pub fn on_snapshot(&mut self, snapshot: Arc<MealCollection>) {
        tracing::debug!(count = snapshot.len(), "Snapshot received");
        self.dispatch(MealScreenIntent::SnapshotPublished(snapshot));
    }

    pub fn on_fetch_failed(&mut self, reason: String) {
        self.dispatch(MealScreenIntent::FetchFailed { reason });
    }

    pub fn on_tick(&mut self) {
        if matches!(self.branch(), ScreenBranch::Loading) {
            self.spinner_frame = (self.spinner_frame + 1) % Spinner::frame_count();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.clamp_scroll();
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Cards that fit in the body at the current terminal size.
    pub fn page_size(&self) -> usize {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        cards_per_page(body_rect(Rect::new(0, 0, cols, rows)).height)
    }

    /// Scroll up (towards the first card).
    pub fn scroll_up(&mut self, cards: usize) {
        self.scroll = self.scroll.saturating_sub(cards);
    }

    /// Scroll down (towards the last card).
    pub fn scroll_down(&mut self, cards: usize) {
        self.scroll = self.scroll.saturating_add(cards);
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Scroll so the last page of cards is visible.
    pub fn scroll_to_end(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> usize {
        self.screen
            .items()
            .len()
            .saturating_sub(self.page_size())
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::MealRecord;

    fn snapshot(count: usize) -> Arc<MealCollection> {
        Arc::new(MealCollection::new(vec![MealRecord::default(); count]))
    }

    #[test]
    fn mount_runs_fetch_once() {
        let mut app = App::new();
        let mut calls = 0;
        assert!(app.mount(|| calls += 1));
        assert!(!app.mount(|| calls += 1));
        assert!(!app.mount(|| calls += 1));
        assert_eq!(calls, 1);
        assert!(app.is_mounted());
    }

    #[test]
    fn snapshot_switches_to_list() {
        let mut app = App::new();
        assert_eq!(app.branch(), ScreenBranch::Loading);
        app.on_snapshot(snapshot(3));
        assert!(matches!(app.branch(), ScreenBranch::List(items) if items.len() == 3));
    }

    #[test]
    fn failure_stays_on_spinner() {
        let mut app = App::new();
        app.on_fetch_failed("timeout".to_string());
        assert!(app.screen().is_failed());
        assert_eq!(app.branch(), ScreenBranch::Loading);
    }

    #[test]
    fn scrolling_is_clamped_to_last_page() {
        let mut app = App::new();
        // 24 rows leaves an 18-row body: three cards per page.
        app.on_resize(80, 24);
        app.on_snapshot(snapshot(10));
        assert_eq!(app.page_size(), 3);

        app.scroll_down(100);
        assert_eq!(app.scroll_offset(), 7);
        app.scroll_up(2);
        assert_eq!(app.scroll_offset(), 5);
        app.scroll_to_top();
        assert_eq!(app.scroll_offset(), 0);
        app.scroll_to_end();
        assert_eq!(app.scroll_offset(), 7);
    }

    #[test]
    fn smaller_snapshot_clamps_scroll() {
        let mut app = App::new();
        app.on_resize(80, 24);
        app.on_snapshot(snapshot(10));
        app.scroll_to_end();
        app.on_snapshot(snapshot(4));
        assert_eq!(app.scroll_offset(), 1);
    }

    #[test]
    fn growing_terminal_clamps_scroll() {
        let mut app = App::new();
        // 11 rows leaves a 5-row body: one card per page.
        app.on_resize(80, 11);
        app.on_snapshot(snapshot(10));
        app.scroll_to_end();
        assert_eq!(app.scroll_offset(), 9);

        app.on_resize(80, 24);
        assert_eq!(app.page_size(), 3);
        assert_eq!(app.scroll_offset(), 7);
    }

    #[test]
    fn spinner_advances_only_while_loading() {
        let mut app = App::new();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.spinner_frame(), 2);
        app.on_snapshot(snapshot(1));
        app.on_tick();
        assert_eq!(app.spinner_frame(), 2);
    }
}
