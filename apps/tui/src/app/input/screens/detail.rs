use crate::app::state::App;
use crossterm::event::KeyCode;
use grand_strategy_core::{Action, Tab};

pub fn handle_detail_input(app: &mut App, key: KeyCode) {
    let action = match key {
        KeyCode::Esc | KeyCode::Char('x') => Action::Close,
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Action::NextTab,
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Action::PreviousTab,
        KeyCode::Char('n') | KeyCode::PageDown => Action::Next,
        KeyCode::Char('p') | KeyCode::PageUp => Action::Previous,
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            match Tab::from_index(index) {
                Some(tab) => Action::SwitchTab(tab),
                None => return,
            }
        }
        _ => return,
    };

    app.dispatch(action);
}
