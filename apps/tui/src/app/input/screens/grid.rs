use crate::app::state::App;
use crossterm::event::KeyCode;
use grand_strategy_core::Action;

pub fn handle_grid_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
            app.focus_visible_card(false);
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
            app.focus_visible_card(true);
        }
        KeyCode::Enter => {
            if app.filter.visible.contains(&app.ui.focused_card()) {
                app.dispatch(Action::ActivateFocused);
            }
        }
        KeyCode::Char('/') => {
            app.filter.editing = true;
        }
        KeyCode::Esc => {
            if app.filter.is_active() {
                app.clear_filter();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
