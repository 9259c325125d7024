//! State for the on-screen emoji keyboard.
//!
//! The picker substitutes for ordinary character input on the compose
//! screen: category tabs across the top, a navigable glyph grid below.
//! It owns no text: every keystroke resolves to a [`PickerAction`] that
//! the app applies to the compose buffer, so the editing model stays
//! testable without any terminal.

use crossterm::event::{KeyCode, KeyEvent};
use mojipad_core::{GridViewport, SelectionState};
use mojipad_editor::catalog::{self, Category, Emoji};
use mojipad_editor::{EditBuffer, RecentEmoji};

/// What the app should do in response to a key the picker handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    None,
    /// Insert this glyph at the compose caret and record it as recent.
    Insert(&'static str),
    /// Delete one step backward in the compose buffer.
    Backspace,
    /// Close the picker.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerMode {
    Browse,
    Search,
}

pub struct PickerState {
    columns: usize,
    mode: PickerMode,
    tabs: SelectionState,
    grid: SelectionState,
    viewport: GridViewport,
    search: EditBuffer,
}

impl PickerState {
    pub fn new(columns: usize) -> Self {
        let mut tabs = SelectionState::new();
        // start on Smileys; Recent is empty on a fresh launch
        tabs.set(Some(1));
        let mut grid = SelectionState::new();
        grid.set(Some(0));
        Self {
            columns: columns.max(1),
            mode: PickerMode::Browse,
            tabs,
            grid,
            viewport: GridViewport::default(),
            search: EditBuffer::new(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_searching(&self) -> bool {
        self.mode == PickerMode::Search
    }

    pub fn search_query(&self) -> &str {
        self.search.as_str()
    }

    pub fn category(&self) -> Category {
        let all = Category::all();
        all[self.tabs.get().unwrap_or(1).min(all.len() - 1)]
    }

    pub fn category_index(&self) -> usize {
        self.tabs.get().unwrap_or(1)
    }

    pub fn selected_cell(&self) -> Option<usize> {
        self.grid.get()
    }

    pub fn viewport(&self) -> &GridViewport {
        &self.viewport
    }

    /// Glyphs currently shown in the grid.
    pub fn entries(&self, recents: &RecentEmoji) -> Vec<&'static Emoji> {
        match self.mode {
            PickerMode::Search => catalog::search(self.search.as_str()),
            PickerMode::Browse => match self.category() {
                Category::Recent => recents
                    .glyphs()
                    .filter_map(catalog::find)
                    .collect(),
                category => catalog::by_category(category).collect(),
            },
        }
    }

    /// Reconcile selection and scroll with the current entry count and the
    /// grid height the renderer has available. Called once per frame.
    pub fn sync_viewport(&mut self, entry_count: usize, viewport_rows: usize) {
        self.grid.clamp(entry_count);
        if entry_count > 0 && !self.grid.has_selection() {
            self.grid.jump_to_first();
        }
        self.viewport
            .set_total_rows(entry_count.div_ceil(self.columns));
        if let Some(idx) = self.grid.get() {
            self.viewport
                .scroll_to_visible(idx / self.columns, viewport_rows);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, recents: &RecentEmoji) -> PickerAction {
        let count = self.entries(recents).len();
        match self.mode {
            PickerMode::Browse => self.handle_browse_key(key.code, count, recents),
            PickerMode::Search => self.handle_search_key(key.code, count, recents),
        }
    }

    fn handle_browse_key(
        &mut self,
        code: KeyCode,
        count: usize,
        recents: &RecentEmoji,
    ) -> PickerAction {
        match code {
            KeyCode::Esc => PickerAction::Close,
            KeyCode::Backspace => PickerAction::Backspace,
            KeyCode::Char('/') => {
                self.mode = PickerMode::Search;
                self.search.clear();
                self.grid.jump_to_first();
                PickerAction::None
            }
            KeyCode::Tab | KeyCode::Char(']') => {
                self.switch_category(true);
                PickerAction::None
            }
            KeyCode::BackTab | KeyCode::Char('[') => {
                self.switch_category(false);
                PickerAction::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cell(-1, count);
                PickerAction::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cell(1, count);
                PickerAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cell(-(self.columns as isize), count);
                PickerAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cell(self.columns as isize, count);
                PickerAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.insert_selected(recents),
            _ => PickerAction::None,
        }
    }

    fn handle_search_key(
        &mut self,
        code: KeyCode,
        count: usize,
        recents: &RecentEmoji,
    ) -> PickerAction {
        match code {
            KeyCode::Esc => {
                self.mode = PickerMode::Browse;
                self.search.clear();
                self.grid.jump_to_first();
                PickerAction::None
            }
            KeyCode::Enter => self.insert_selected(recents),
            KeyCode::Backspace => {
                self.search.backspace();
                self.grid.jump_to_first();
                PickerAction::None
            }
            KeyCode::Left => {
                self.move_cell(-1, count);
                PickerAction::None
            }
            KeyCode::Right => {
                self.move_cell(1, count);
                PickerAction::None
            }
            KeyCode::Up => {
                self.move_cell(-(self.columns as isize), count);
                PickerAction::None
            }
            KeyCode::Down => {
                self.move_cell(self.columns as isize, count);
                PickerAction::None
            }
            KeyCode::Char(c) => {
                self.search.insert_char(c);
                self.grid.jump_to_first();
                PickerAction::None
            }
            _ => PickerAction::None,
        }
    }

    fn insert_selected(&self, recents: &RecentEmoji) -> PickerAction {
        let entries = self.entries(recents);
        match self.grid.get().and_then(|idx| entries.get(idx)) {
            Some(emoji) => PickerAction::Insert(emoji.glyph),
            None => PickerAction::None,
        }
    }

    fn switch_category(&mut self, forward: bool) {
        let count = Category::all().len();
        if forward {
            self.tabs.cycle_next(count);
        } else {
            self.tabs.cycle_prev(count);
        }
        self.mode = PickerMode::Browse;
        self.grid.jump_to_first();
    }

    fn move_cell(&mut self, delta: isize, count: usize) {
        if count == 0 {
            self.grid.clear();
            return;
        }
        let current = self.grid.get().unwrap_or(0) as isize;
        let next = current + delta;
        if (0..count as isize).contains(&next) {
            self.grid.set(Some(next as usize));
        } else if delta.abs() == 1 {
            // horizontal moves clamp at the row of entries' edges
            self.grid.set(Some(current.clamp(0, count as isize - 1) as usize));
        }
        // vertical moves off the grid keep the current cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_starts_on_smileys_with_first_cell() {
        let picker = PickerState::new(8);
        assert_eq!(picker.category(), Category::Smileys);
        assert_eq!(picker.selected_cell(), Some(0));
    }

    #[test]
    fn test_tab_cycles_categories_and_resets_cell() {
        let mut picker = PickerState::new(8);
        let recents = RecentEmoji::default();
        picker.handle_key(key(KeyCode::Down), &recents);
        picker.handle_key(key(KeyCode::Tab), &recents);
        assert_eq!(picker.category(), Category::People);
        assert_eq!(picker.selected_cell(), Some(0));
        picker.handle_key(key(KeyCode::BackTab), &recents);
        picker.handle_key(key(KeyCode::BackTab), &recents);
        assert_eq!(picker.category(), Category::Recent);
    }

    #[test]
    fn test_grid_navigation_stays_in_bounds() {
        let mut picker = PickerState::new(4);
        let recents = RecentEmoji::default();
        let count = picker.entries(&recents).len();
        assert!(count > 4);

        picker.handle_key(key(KeyCode::Left), &recents);
        assert_eq!(picker.selected_cell(), Some(0));
        picker.handle_key(key(KeyCode::Up), &recents);
        assert_eq!(picker.selected_cell(), Some(0));
        picker.handle_key(key(KeyCode::Down), &recents);
        assert_eq!(picker.selected_cell(), Some(4));
        picker.handle_key(key(KeyCode::Right), &recents);
        assert_eq!(picker.selected_cell(), Some(5));

        for _ in 0..1000 {
            picker.handle_key(key(KeyCode::Down), &recents);
            picker.handle_key(key(KeyCode::Right), &recents);
        }
        assert!(picker.selected_cell().unwrap() < count);
    }

    #[test]
    fn test_enter_emits_insert_for_selected_glyph() {
        let mut picker = PickerState::new(8);
        let recents = RecentEmoji::default();
        let first = picker.entries(&recents)[0].glyph;
        let action = picker.handle_key(key(KeyCode::Enter), &recents);
        assert_eq!(action, PickerAction::Insert(first));
    }

    #[test]
    fn test_enter_on_empty_recent_tab_is_noop() {
        let mut picker = PickerState::new(8);
        let recents = RecentEmoji::default();
        picker.handle_key(key(KeyCode::BackTab), &recents);
        assert_eq!(picker.category(), Category::Recent);
        let action = picker.handle_key(key(KeyCode::Enter), &recents);
        assert_eq!(action, PickerAction::None);
    }

    #[test]
    fn test_recent_tab_shows_recorded_glyphs_most_recent_first() {
        let mut picker = PickerState::new(8);
        let mut recents = RecentEmoji::default();
        recents.record("🔥");
        recents.record("✨");
        picker.handle_key(key(KeyCode::BackTab), &recents);
        let entries = picker.entries(&recents);
        assert_eq!(entries[0].glyph, "✨");
        assert_eq!(entries[1].glyph, "🔥");
    }

    #[test]
    fn test_backspace_and_esc_map_to_actions() {
        let mut picker = PickerState::new(8);
        let recents = RecentEmoji::default();
        assert_eq!(
            picker.handle_key(key(KeyCode::Backspace), &recents),
            PickerAction::Backspace
        );
        assert_eq!(
            picker.handle_key(key(KeyCode::Esc), &recents),
            PickerAction::Close
        );
    }

    #[test]
    fn test_search_mode_types_and_narrows() {
        let mut picker = PickerState::new(8);
        let recents = RecentEmoji::default();
        picker.handle_key(key(KeyCode::Char('/')), &recents);
        assert!(picker.is_searching());
        for c in "fire".chars() {
            picker.handle_key(key(KeyCode::Char(c)), &recents);
        }
        assert_eq!(picker.search_query(), "fire");
        let entries = picker.entries(&recents);
        assert!(entries.iter().any(|e| e.glyph == "🔥"));
        let action = picker.handle_key(key(KeyCode::Enter), &recents);
        assert!(matches!(action, PickerAction::Insert(_)));
    }

    #[test]
    fn test_search_esc_returns_to_browse() {
        let mut picker = PickerState::new(8);
        let recents = RecentEmoji::default();
        picker.handle_key(key(KeyCode::Char('/')), &recents);
        picker.handle_key(key(KeyCode::Char('x')), &recents);
        picker.handle_key(key(KeyCode::Esc), &recents);
        assert!(!picker.is_searching());
        assert_eq!(picker.search_query(), "");
        assert_eq!(picker.category(), Category::Smileys);
    }

    #[test]
    fn test_sync_viewport_follows_selection() {
        let mut picker = PickerState::new(4);
        let recents = RecentEmoji::default();
        let count = picker.entries(&recents).len();
        for _ in 0..count {
            picker.handle_key(key(KeyCode::Down), &recents);
        }
        picker.sync_viewport(count, 2);
        let row = picker.selected_cell().unwrap() / 4;
        assert!(picker.viewport().visible_rows(2).contains(&row));
    }
}
