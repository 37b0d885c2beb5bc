use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use grand_strategy_core::{Axis, ContentStore, Tab};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let export = build_headless_export(&app.store, app.root.dark, app.variant.as_str());

    if json {
        println!("{}", serde_json::to_string_pretty(&export)?);
    } else {
        render_headless_text(&export);
    }

    log::info!(
        "event=headless_export profiles={} json={json}",
        export.profiles.len()
    );
    Ok(())
}

fn render_headless_text(export: &HeadlessExport) {
    println!("\n{}", export.title);
    println!("{}", "=".repeat(export.title.len()));
    println!("Theme: {}", if export.dark_mode { "dark" } else { "light" });
    println!("Variant: {}", export.variant);
    println!("Tabs: {}", export.tabs.join(" | "));

    for profile in &export.profiles {
        println!("\n{} ({})", profile.name, profile.years);
        println!("  Focus: {}", profile.focus);
        for (axis, value) in &profile.power {
            println!("  - {axis}: {value}");
        }
    }
}

pub fn build_headless_export(store: &ContentStore, dark: bool, variant: &str) -> HeadlessExport {
    let profiles = store
        .profiles()
        .iter()
        .map(|profile| HeadlessProfile {
            name: profile.name,
            years: profile.years,
            focus: profile.focus,
            power: profile
                .power_distribution
                .iter()
                .map(|(axis, value)| (axis.as_str(), value))
                .collect(),
        })
        .collect();

    HeadlessExport {
        title: grand_strategy_core::shell::PAGE_TITLE,
        dark_mode: dark,
        variant: variant.to_string(),
        tabs: Tab::ALL.iter().map(|tab| tab.label()).collect(),
        axes: Axis::ALL.iter().map(|axis| axis.label()).collect(),
        profiles,
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlessExport {
    pub title: &'static str,
    pub dark_mode: bool,
    pub variant: String,
    pub tabs: Vec<&'static str>,
    pub axes: Vec<&'static str>,
    pub profiles: Vec<HeadlessProfile>,
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessProfile {
    pub name: &'static str,
    pub years: &'static str,
    pub focus: &'static str,
    pub power: Vec<(&'static str, f64)>,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }

    log::info!("event=app_exit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_export_lists_profiles_in_order() {
        let export = build_headless_export(&ContentStore::builtin(), false, "classic");
        let names: Vec<_> = export.profiles.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Truman", "Nixon", "Reagan"]);
        assert_eq!(export.tabs, ["Overview", "Strategy", "Key Events", "Analysis"]);
        assert_eq!(export.profiles[0].power.len(), 4);
    }

    #[test]
    fn headless_json_uses_camel_case() -> Result<(), serde_json::Error> {
        let export = build_headless_export(&ContentStore::builtin(), true, "neon");
        let value = serde_json::to_value(&export)?;
        assert_eq!(value["darkMode"], true);
        assert_eq!(value["variant"], "neon");
        assert_eq!(value["profiles"][2]["name"], "Reagan");
        assert_eq!(value["profiles"][2]["power"][0][0], "diplomatic");
        Ok(())
    }
}
