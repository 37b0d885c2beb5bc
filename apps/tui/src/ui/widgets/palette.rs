use grand_strategy_core::{Palette, Rgb};
use ratatui::style::{Color, Modifier, Style};

pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Ratatui styles derived from the page palette.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    pub base: Style,
    pub surface: Style,
    pub border: Style,
    pub muted: Style,
    pub accent: Style,
    pub heading: Style,
}

impl Styles {
    pub fn from_palette(palette: &Palette) -> Self {
        let background = color(palette.background);
        let surface = color(palette.surface);

        Self {
            base: Style::default().fg(color(palette.text)).bg(background),
            surface: Style::default().fg(color(palette.text)).bg(surface),
            border: Style::default().fg(color(palette.border)),
            muted: Style::default().fg(color(palette.muted)),
            accent: Style::default().fg(color(palette.accent)),
            heading: Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grand_strategy_core::{PageVariant, StyleConfig};

    #[test]
    fn rgb_maps_to_true_color() {
        assert_eq!(color(Rgb(59, 130, 246)), Color::Rgb(59, 130, 246));
    }

    #[test]
    fn dark_palette_changes_base_background() {
        let light = Styles::from_palette(&Palette::resolve(StyleConfig::default()));
        let dark = Styles::from_palette(&Palette::resolve(StyleConfig {
            variant: PageVariant::Classic,
            dark: true,
        }));
        assert_ne!(light.base.bg, dark.base.bg);
    }
}
