//! Transient UI state and the reducer that drives it.
//!
//! Frontends own a [`UiState`], feed it [`Action`]s from key presses or
//! clicks, and apply any returned [`SideEffect`] to their document root.

use crate::content::{ContentStore, Profile};
use crate::domain::Tab;
use crate::nav::{wrap_decrement, wrap_increment};
use crate::selection::Selection;
use crate::tabs::TabState;
use crate::theme::DocumentRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Select(&'a str),
    ActivateFocused,
    Close,
    Next,
    Previous,
    SwitchTab(Tab),
    NextTab,
    PreviousTab,
    FocusCard(usize),
    FocusNextCard,
    FocusPreviousCard,
}

/// Emitted only when the detail view changes between closed and open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    LockBackground,
    UnlockBackground,
}

impl SideEffect {
    pub fn apply(self, root: &mut impl DocumentRoot) {
        root.set_scroll_locked(self == Self::LockBackground);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub selection: Selection,
    pub tabs: TabState,
    focused_card: usize,
}

impl UiState {
    pub const fn new() -> Self {
        Self {
            selection: Selection::new(),
            tabs: TabState::new(),
            focused_card: 0,
        }
    }

    pub fn apply(&mut self, action: Action<'_>, store: &ContentStore) -> Option<SideEffect> {
        let was_open = self.selection.is_open();

        match action {
            Action::Select(name) => self.select(store, name),
            Action::ActivateFocused => {
                if let Some(profile) = store.get(self.focused_card) {
                    self.select(store, profile.name);
                }
            }
            Action::Close => self.selection.close(),
            Action::Next => self.selection.next(store),
            Action::Previous => self.selection.previous(store),
            Action::SwitchTab(tab) => self.tabs.switch_to(tab),
            Action::NextTab => self.tabs.next(),
            Action::PreviousTab => self.tabs.previous(),
            Action::FocusCard(index) => {
                if index < store.len() {
                    self.focused_card = index;
                }
            }
            Action::FocusNextCard => {
                self.focused_card = wrap_increment(self.focused_card, store.len());
            }
            Action::FocusPreviousCard => {
                self.focused_card = wrap_decrement(self.focused_card, store.len());
            }
        }

        match (was_open, self.selection.is_open()) {
            (false, true) => Some(SideEffect::LockBackground),
            (true, false) => Some(SideEffect::UnlockBackground),
            _ => None,
        }
    }

    fn select(&mut self, store: &ContentStore, name: &str) {
        if self.selection.select(store, name) {
            self.tabs.reset();
            if let Some(index) = self.selection.active_index() {
                self.focused_card = index;
            }
            log::debug!("opened detail view for {name}");
        }
    }

    pub const fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    pub const fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub const fn focused_card(&self) -> usize {
        self.focused_card
    }

    pub fn active_profile<'s>(&self, store: &'s ContentStore) -> Option<&'s Profile> {
        self.selection.active_profile(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_name(state: &UiState, store: &ContentStore) -> Option<&'static str> {
        state.active_profile(store).map(|profile| profile.name)
    }

    #[test]
    fn opening_locks_and_closing_unlocks() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();

        assert_eq!(
            state.apply(Action::Select("Truman"), &store),
            Some(SideEffect::LockBackground)
        );
        assert_eq!(state.apply(Action::Next, &store), None);
        assert_eq!(
            state.apply(Action::Close, &store),
            Some(SideEffect::UnlockBackground)
        );
        assert_eq!(state.apply(Action::Close, &store), None);
    }

    #[test]
    fn unknown_select_emits_nothing() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();

        assert_eq!(state.apply(Action::Select("Ford"), &store), None);
        assert_eq!(state, UiState::new());
    }

    #[test]
    fn switching_profiles_keeps_tab() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();
        state.apply(Action::Select("Truman"), &store);
        state.apply(Action::SwitchTab(Tab::Analysis), &store);

        state.apply(Action::Next, &store);
        assert_eq!(state.active_tab(), Tab::Analysis);
        state.apply(Action::Previous, &store);
        assert_eq!(state.active_tab(), Tab::Analysis);
    }

    #[test]
    fn switching_tabs_keeps_profile() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();
        state.apply(Action::Select("Nixon"), &store);

        for tab in Tab::ALL {
            state.apply(Action::SwitchTab(tab), &store);
            assert_eq!(active_name(&state, &store), Some("Nixon"));
        }
        state.apply(Action::NextTab, &store);
        assert_eq!(active_name(&state, &store), Some("Nixon"));
    }

    #[test]
    fn reopening_starts_on_overview() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();
        state.apply(Action::Select("Reagan"), &store);
        state.apply(Action::SwitchTab(Tab::Events), &store);
        state.apply(Action::Close, &store);

        state.apply(Action::Select("Reagan"), &store);
        assert!(state.is_open());
        assert_eq!(state.active_tab(), Tab::Overview);
    }

    #[test]
    fn card_focus_wraps_and_activates() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();

        state.apply(Action::FocusPreviousCard, &store);
        assert_eq!(state.focused_card(), 2);
        state.apply(Action::FocusNextCard, &store);
        assert_eq!(state.focused_card(), 0);

        state.apply(Action::FocusCard(1), &store);
        state.apply(Action::FocusCard(9), &store);
        assert_eq!(state.focused_card(), 1);

        assert_eq!(
            state.apply(Action::ActivateFocused, &store),
            Some(SideEffect::LockBackground)
        );
        assert_eq!(active_name(&state, &store), Some("Nixon"));
    }

    #[test]
    fn navigation_moves_card_focus_only_on_select() {
        let store = ContentStore::builtin();
        let mut state = UiState::new();
        state.apply(Action::Select("Reagan"), &store);
        assert_eq!(state.focused_card(), 2);

        state.apply(Action::Next, &store);
        assert_eq!(state.focused_card(), 2);
    }
}
