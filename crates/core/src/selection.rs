use crate::content::{ContentStore, Profile};
use crate::nav::{wrap_decrement, wrap_increment};

/// Which profile is active and whether the detail view shows it.
///
/// Closing keeps the remembered profile; reopening always goes through
/// [`Selection::select`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<usize>,
    open: bool,
}

impl Selection {
    pub const fn new() -> Self {
        Self {
            active: None,
            open: false,
        }
    }

    /// Activates `name` and opens the detail view. Unknown names change nothing.
    pub fn select(&mut self, store: &ContentStore, name: &str) -> bool {
        let Some(index) = store.index_of(name) else {
            log::debug!("ignoring selection of unknown profile {name:?}");
            return false;
        };

        self.active = Some(index);
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self, store: &ContentStore) {
        if let Some(index) = self.active {
            self.active = Some(wrap_increment(index, store.len()));
        }
    }

    pub fn previous(&mut self, store: &ContentStore) {
        if let Some(index) = self.active {
            self.active = Some(wrap_decrement(index, store.len()));
        }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_profile<'s>(&self, store: &'s ContentStore) -> Option<&'s Profile> {
        self.active.and_then(|index| store.get(index))
    }

    /// The profile the detail view is showing, if it is open.
    pub fn visible_profile<'s>(&self, store: &'s ContentStore) -> Option<&'s Profile> {
        if self.open {
            self.active_profile(store)
        } else {
            None
        }
    }
}
