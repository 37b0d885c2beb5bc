//! Render-ready view model of the whole page.
//!
//! The shell has no state of its own. It reads the store, the UI state and
//! the style configuration and produces a [`PageView`] that a frontend only
//! has to paint.

use crate::chart::{project, ChartGeometry, Normalization};
use crate::content::{ContentStore, Profile, TimelineEvent};
use crate::domain::Tab;
use crate::state::UiState;
use crate::style::{Palette, StyleConfig};

pub const PAGE_TITLE: &str = "U.S. Grand Strategy Visualization";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: &'static str,
    pub cards: Vec<CardView>,
    pub overlay: Option<OverlayView>,
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub name: &'static str,
    pub years: &'static str,
    pub focus: &'static str,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub heading: String,
    pub tabs: Vec<TabView>,
    pub pane: PaneView,
    /// One-based position of the profile and the store size, e.g. (2, 3).
    pub position: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaneView {
    Overview {
        focus: &'static str,
        chart: ChartGeometry,
    },
    Strategy {
        grand_strategy: &'static str,
        theory: &'static str,
        national_interests: &'static [&'static str],
        instruments_of_power: &'static [&'static str],
    },
    Events {
        timeline: &'static [TimelineEvent],
        key_events: &'static [&'static str],
    },
    Analysis {
        fas_analysis: &'static str,
        quotes: &'static [&'static str],
    },
}

impl PaneView {
    pub const fn tab(&self) -> Tab {
        match self {
            Self::Overview { .. } => Tab::Overview,
            Self::Strategy { .. } => Tab::Strategy,
            Self::Events { .. } => Tab::Events,
            Self::Analysis { .. } => Tab::Analysis,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresentationShell {
    pub style: StyleConfig,
    pub normalization: Normalization,
}

impl PresentationShell {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            normalization: Normalization::default(),
        }
    }

    #[must_use]
    pub const fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn compose(&self, store: &ContentStore, state: &UiState) -> PageView {
        let visible: Vec<usize> = (0..store.len()).collect();
        self.compose_visible(store, state, &visible)
    }

    /// Like [`Self::compose`] but only lists the cards at `visible` (store
    /// indices, e.g. the output of a card filter). The overlay is unaffected.
    pub fn compose_visible(
        &self,
        store: &ContentStore,
        state: &UiState,
        visible: &[usize],
    ) -> PageView {
        let cards = visible
            .iter()
            .filter_map(|&index| store.get(index).map(|profile| (index, profile)))
            .map(|(index, profile)| CardView {
                index,
                name: profile.name,
                years: profile.years,
                focus: profile.focus,
                focused: index == state.focused_card(),
            })
            .collect();

        let overlay = state
            .selection
            .visible_profile(store)
            .map(|profile| self.overlay(store, state, profile));

        PageView {
            title: PAGE_TITLE,
            cards,
            overlay,
            palette: Palette::resolve(self.style),
        }
    }

    fn overlay(&self, store: &ContentStore, state: &UiState, profile: &Profile) -> OverlayView {
        let active = state.active_tab();
        let tabs = Tab::ALL
            .iter()
            .map(|&tab| TabView {
                tab,
                label: tab.label(),
                active: tab == active,
            })
            .collect();

        let position = state
            .selection
            .active_index()
            .map_or((0, store.len()), |index| (index + 1, store.len()));

        OverlayView {
            heading: profile.heading(),
            tabs,
            pane: self.pane(profile, active),
            position,
        }
    }

    fn pane(&self, profile: &Profile, tab: Tab) -> PaneView {
        match tab {
            Tab::Overview => PaneView::Overview {
                focus: profile.focus,
                chart: project(&profile.power_distribution, self.normalization),
            },
            Tab::Strategy => PaneView::Strategy {
                grand_strategy: profile.grand_strategy,
                theory: profile.theory,
                national_interests: profile.national_interests,
                instruments_of_power: profile.instruments_of_power,
            },
            Tab::Events => PaneView::Events {
                timeline: profile.timeline_events,
                key_events: profile.key_events,
            },
            Tab::Analysis => PaneView::Analysis {
                fas_analysis: profile.fas_analysis,
                quotes: profile.quotes,
            },
        }
    }
}
