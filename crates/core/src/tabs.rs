use crate::domain::Tab;
use crate::nav::{wrap_decrement, wrap_increment};

/// Active pane of the detail view. Independent of the selected profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub const fn new() -> Self {
        Self {
            active: Tab::Overview,
        }
    }

    pub const fn active(&self) -> Tab {
        self.active
    }

    pub fn switch_to(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        let index = wrap_increment(self.active.index(), Tab::ALL.len());
        self.active = Tab::ALL[index];
    }

    pub fn previous(&mut self) {
        let index = wrap_decrement(self.active.index(), Tab::ALL.len());
        self.active = Tab::ALL[index];
    }

    /// Back to the pane every freshly opened detail view starts on.
    pub fn reset(&mut self) {
        self.active = Tab::Overview;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview() {
        assert_eq!(TabState::new().active(), Tab::Overview);
    }

    #[test]
    fn switch_accepts_every_tab() {
        let mut tabs = TabState::new();
        for tab in Tab::ALL {
            tabs.switch_to(tab);
            assert_eq!(tabs.active(), tab);
        }
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut tabs = TabState::new();
        tabs.previous();
        assert_eq!(tabs.active(), Tab::Analysis);
        tabs.next();
        assert_eq!(tabs.active(), Tab::Overview);
        tabs.next();
        assert_eq!(tabs.active(), Tab::Strategy);
    }
}
