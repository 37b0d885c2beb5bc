//! Core of the grand strategy explorer: the static profile store, the UI
//! state reducer, radar chart geometry, theme persistence and the page view
//! model. Frontends (terminal and browser) only paint what this crate builds.

pub mod chart;
pub mod content;
pub mod domain;
pub mod error;
pub mod filter;
pub mod nav;
pub mod selection;
pub mod shell;
pub mod state;
pub mod style;
pub mod tabs;
pub mod theme;

pub use chart::{project, ChartGeometry, ChartPoint, Normalization};
pub use content::{ContentStore, PowerDistribution, Profile, TimelineEvent};
pub use domain::{Axis, Tab};
pub use error::{ContentError, StorageError};
pub use shell::{PageView, PaneView, PresentationShell};
pub use state::{Action, SideEffect, UiState};
pub use style::{PageVariant, Palette, Rgb, StyleConfig};
pub use theme::{DocumentRoot, KeyValueStore, MemoryStore, RootState, ThemeController};
