use crate::cli::CliArgs;
use crate::ui::widgets::palette::Styles;
use crate::ui::widgets::popup::centered_rect;
use grand_strategy_core::Palette;
use ratatui::style::Modifier;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: &[(&str, &str)] = &[
    ("F1", "Toggle this help screen"),
    ("←/→ h/l", "Move between presidents"),
    ("Enter", "Open the focused president"),
    ("/", "Filter presidents by name, years or focus"),
    ("Esc", "Close the detail view / clear the filter"),
    ("t", "Toggle dark mode (saved between runs)"),
    ("v", "Cycle page variant"),
    ("r", "Switch chart scale (0-100 or relative)"),
    ("Space", "Pause animations"),
    ("q", "Quit"),
];

const DETAIL_SHORTCUTS: &[(&str, &str)] = &[
    ("←/→ Tab", "Previous/next tab"),
    ("1-4", "Overview, Strategy, Key Events, Analysis"),
    ("n/p", "Next/previous president (wraps around)"),
    ("Esc x", "Close"),
];

pub fn render_help(palette: &Palette, f: &mut Frame<'_>) {
    let styles = Styles::from_palette(palette);
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help & Keyboard Shortcuts ")
        .title_style(styles.heading)
        .borders(Borders::ALL)
        .border_style(styles.accent)
        .style(styles.surface);

    let key_style = styles.accent.add_modifier(Modifier::BOLD);
    let shortcut_line = |(key, description): &(&'static str, &'static str)| {
        TextLine::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::raw(*description),
        ])
    };

    let mut lines = vec![
        TextLine::from(Span::styled(
            "U.S. Grand Strategy Explorer",
            styles.heading,
        )),
        TextLine::from(""),
        TextLine::from(
            "Compare how post-war administrations balanced diplomatic, informational, military and economic power.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Grid",
            styles.surface.add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(SHORTCUTS.iter().map(shortcut_line));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Detail view",
        styles.surface.add_modifier(Modifier::BOLD),
    )));
    lines.extend(DETAIL_SHORTCUTS.iter().map(shortcut_line));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "CLI Options",
        styles.surface.add_modifier(Modifier::BOLD),
    )));
    lines.extend(cli_option_lines().into_iter().map(TextLine::from));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Flag lines from the clap help, without the usage and section headers.
fn cli_option_lines() -> Vec<String> {
    CliArgs::help_text()
        .lines()
        .filter(|line| line.trim_start().starts_with('-'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_options_list_flags_only() {
        let lines = cli_option_lines();
        assert!(lines.iter().any(|line| line.contains("--headless")));
        assert!(lines.iter().any(|line| line.contains("--theme-file")));
        assert!(lines.iter().all(|line| !line.starts_with("Usage")));
    }
}
