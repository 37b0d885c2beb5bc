// UI module for the grand strategy explorer
// Paints the page view composed by the core crate

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;
use tachyonfx::EffectRenderer;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let page = app.page();

    screens::grid::render_grid(app, &page, f);

    if let Some(overlay) = &page.overlay {
        let area = screens::detail::render_detail(app, overlay, &page.palette, f);

        if let Some(effect) = app.overlay_effect.as_mut() {
            f.buffer_mut().render_effect(effect, area, app.last_tick);
            if effect.done() {
                app.overlay_effect = None;
            }
        }
    }

    if app.show_help {
        screens::help::render_help(&page.palette, f);
    }
}
