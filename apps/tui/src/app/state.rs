use crate::config::AppConfig;
use crate::storage::FileStore;
use grand_strategy_core::filter::filter_cards;
use grand_strategy_core::nav::{wrap_decrement, wrap_increment};
use grand_strategy_core::{
    Action, ContentStore, KeyValueStore, Normalization, PageVariant, PageView, PresentationShell,
    RootState, SideEffect, StyleConfig, ThemeController, UiState,
};
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};

const OVERLAY_REVEAL_MS: u32 = 350;

/// Text filter over the card list. `editing` means keys go to the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub editing: bool,
    pub query: String,
    pub visible: Vec<usize>,
}

impl CardFilter {
    pub fn is_active(&self) -> bool {
        self.editing || !self.query.is_empty()
    }
}

pub struct App {
    pub running: bool,
    pub store: ContentStore,
    pub ui: UiState,
    pub theme: ThemeController<Box<dyn KeyValueStore>>,
    pub root: RootState,
    pub variant: PageVariant,
    pub normalization: Normalization,
    pub filter: CardFilter,
    pub show_help: bool,
    pub status_message: String,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub overlay_effect: Option<Effect>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let storage: Box<dyn KeyValueStore> = Box::new(FileStore::new(&config.theme_file));
        Self::with_storage(ContentStore::builtin(), storage, config.variant)
    }

    pub fn with_storage(
        store: ContentStore,
        storage: Box<dyn KeyValueStore>,
        variant: PageVariant,
    ) -> Self {
        let theme = ThemeController::load(storage);
        let mut root = RootState::default();
        theme.apply(&mut root);

        let visible = (0..store.len()).collect();

        Self {
            running: true,
            store,
            ui: UiState::new(),
            theme,
            root,
            variant,
            normalization: Normalization::default(),
            filter: CardFilter {
                visible,
                ..CardFilter::default()
            },
            show_help: false,
            status_message: String::new(),
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            overlay_effect: None,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_tick = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.animation_paused {
            return;
        }

        // Cycles between 0 and 2*PI
        self.animation_counter += self.last_tick.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    /// Runs `action` through the reducer and applies the resulting effect.
    pub fn dispatch(&mut self, action: Action<'_>) {
        let Some(effect) = self.ui.apply(action, &self.store) else {
            return;
        };

        effect.apply(&mut self.root);
        if effect == SideEffect::LockBackground {
            self.overlay_effect = Some(fx::coalesce((OVERLAY_REVEAL_MS, Interpolation::QuadOut)));
        } else {
            self.overlay_effect = None;
        }
    }

    pub fn toggle_theme(&mut self) {
        let dark = self.theme.toggle(&mut self.root);
        self.status_message = if dark {
            "Dark mode on".to_string()
        } else {
            "Light mode on".to_string()
        };
    }

    pub fn cycle_variant(&mut self) {
        self.variant = self.variant.next();
        self.status_message = format!("Variant: {}", self.variant.label());
    }

    pub fn toggle_normalization(&mut self) {
        self.normalization = match self.normalization {
            Normalization::DomainMax(_) => Normalization::RelativeToLargest,
            Normalization::RelativeToLargest => Normalization::default(),
        };
        self.status_message = match self.normalization {
            Normalization::DomainMax(max) => format!("Chart scale: 0-{max}"),
            Normalization::RelativeToLargest => "Chart scale: relative to largest axis".to_string(),
        };
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
    }

    pub fn set_filter_query(&mut self, query: String) {
        self.filter.visible = filter_cards(&self.store, &query);
        self.filter.query = query;

        if !self.filter.visible.contains(&self.ui.focused_card()) {
            if let Some(&first) = self.filter.visible.first() {
                self.dispatch(Action::FocusCard(first));
            }
        }
    }

    pub fn clear_filter(&mut self) {
        self.filter.editing = false;
        self.set_filter_query(String::new());
    }

    /// Moves card focus among the visible cards, wrapping.
    pub fn focus_visible_card(&mut self, forward: bool) {
        let visible = &self.filter.visible;
        if visible.is_empty() {
            return;
        }

        let target = match visible.iter().position(|&i| i == self.ui.focused_card()) {
            Some(position) if forward => visible[wrap_increment(position, visible.len())],
            Some(position) => visible[wrap_decrement(position, visible.len())],
            None => visible[0],
        };
        self.dispatch(Action::FocusCard(target));
    }

    pub fn style(&self) -> StyleConfig {
        StyleConfig {
            variant: self.variant,
            dark: self.root.dark,
        }
    }

    pub fn page(&self) -> PageView {
        PresentationShell::new(self.style())
            .with_normalization(self.normalization)
            .compose_visible(&self.store, &self.ui, &self.filter.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grand_strategy_core::theme::DARK_MODE_KEY;
    use grand_strategy_core::MemoryStore;

    pub fn test_app() -> App {
        App::with_storage(
            ContentStore::builtin(),
            Box::new(MemoryStore::new()),
            PageVariant::Classic,
        )
    }

    #[test]
    fn starts_on_grid_in_light_mode() {
        let app = test_app();
        assert!(!app.ui.is_open());
        assert!(!app.root.dark);
        assert_eq!(app.filter.visible, [0, 1, 2]);
    }

    #[test]
    fn persisted_dark_mode_is_applied_at_startup() {
        let app = App::with_storage(
            ContentStore::builtin(),
            Box::new(MemoryStore::with_item(DARK_MODE_KEY, "true")),
            PageVariant::Classic,
        );
        assert!(app.root.dark);
        assert!(app.style().dark);
    }

    #[test]
    fn dispatch_applies_scroll_lock() {
        let mut app = test_app();

        app.dispatch(Action::Select("Truman"));
        assert!(app.root.scroll_locked);
        assert!(app.overlay_effect.is_some());

        app.dispatch(Action::Close);
        assert!(!app.root.scroll_locked);
        assert!(app.overlay_effect.is_none());
    }

    #[test]
    fn filter_moves_focus_to_first_match() {
        let mut app = test_app();
        app.set_filter_query("reagan".to_string());

        assert_eq!(app.filter.visible, [2]);
        assert_eq!(app.ui.focused_card(), 2);
        assert_eq!(app.page().cards.len(), 1);

        app.clear_filter();
        assert_eq!(app.filter.visible, [0, 1, 2]);
        assert_eq!(app.ui.focused_card(), 2);
    }

    #[test]
    fn focus_skips_hidden_cards() {
        let mut app = test_app();
        app.set_filter_query("19".to_string());
        app.filter.visible = vec![0, 2];

        app.focus_visible_card(true);
        assert_eq!(app.ui.focused_card(), 2);
        app.focus_visible_card(true);
        assert_eq!(app.ui.focused_card(), 0);
        app.focus_visible_card(false);
        assert_eq!(app.ui.focused_card(), 2);
    }

    #[test]
    fn cycle_variant_wraps() {
        let mut app = test_app();
        app.cycle_variant();
        app.cycle_variant();
        assert_eq!(app.variant, PageVariant::Neon);
        app.cycle_variant();
        assert_eq!(app.variant, PageVariant::Classic);
    }

    #[test]
    fn toggle_normalization_round_trips() {
        let mut app = test_app();
        app.toggle_normalization();
        assert_eq!(app.normalization, Normalization::RelativeToLargest);
        app.toggle_normalization();
        assert_eq!(app.normalization, Normalization::default());
    }
}
