use crate::app::state::App;
use crossterm::event::KeyCode;

mod detail;
mod filter;
mod grid;
mod help;

/// Screen the keyboard currently talks to. The detail overlay sits on top of
/// the grid and swallows every key while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputScreen {
    Help,
    Filter,
    Detail,
    Grid,
}

pub fn active_screen(app: &App) -> InputScreen {
    if app.show_help {
        InputScreen::Help
    } else if app.ui.is_open() {
        InputScreen::Detail
    } else if app.filter.editing {
        InputScreen::Filter
    } else {
        InputScreen::Grid
    }
}

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    let screen = active_screen(app);
    if screen != InputScreen::Filter && handle_global_input(app, key) {
        return;
    }

    match screen {
        InputScreen::Help => {}
        InputScreen::Filter => filter::handle_filter_input(app, key),
        InputScreen::Detail => detail::handle_detail_input(app, key),
        InputScreen::Grid => grid::handle_grid_input(app, key),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(' ') => app.toggle_animation_pause(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('v') => app.cycle_variant(),
        KeyCode::Char('r') => app.toggle_normalization(),
        _ => return false,
    }
    true
}
