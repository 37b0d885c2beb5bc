use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Enter => {
            app.filter.editing = false;
        }
        KeyCode::Backspace => {
            let mut query = app.filter.query.clone();
            query.pop();
            app.set_filter_query(query);
        }
        KeyCode::Char(ch) => {
            let mut query = app.filter.query.clone();
            query.push(ch);
            app.set_filter_query(query);
        }
        _ => {}
    }
}
