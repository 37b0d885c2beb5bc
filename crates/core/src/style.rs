//! Page variants and the palettes they resolve to.

use crate::nav::wrap_increment;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    #[default]
    Classic,
    Gradient,
    Neon,
}

impl PageVariant {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Gradient, Self::Neon];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Gradient => "gradient",
            Self::Neon => "neon",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "gradient" => Some(Self::Gradient),
            "neon" => Some(Self::Neon),
            _ => None,
        }
    }

    /// The variant after this one, wrapping back to Classic.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|variant| *variant == self)
            .unwrap_or(0);
        Self::ALL[wrap_increment(index, Self::ALL.len())]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Gradient => "Gradient",
            Self::Neon => "Neon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleConfig {
    pub variant: PageVariant,
    pub dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub chart_stroke: Rgb,
    pub chart_grid: Rgb,
}

impl Palette {
    pub const fn resolve(style: StyleConfig) -> Self {
        match (style.variant, style.dark) {
            (PageVariant::Classic, false) => Self {
                background: Rgb(219, 234, 254),
                surface: Rgb(255, 255, 255),
                border: Rgb(209, 213, 219),
                text: Rgb(31, 41, 55),
                muted: Rgb(107, 114, 128),
                accent: Rgb(59, 130, 246),
                chart_stroke: Rgb(136, 132, 216),
                chart_grid: Rgb(209, 213, 219),
            },
            (PageVariant::Classic, true) => Self {
                background: Rgb(17, 24, 39),
                surface: Rgb(55, 65, 81),
                border: Rgb(75, 85, 99),
                text: Rgb(255, 255, 255),
                muted: Rgb(156, 163, 175),
                accent: Rgb(59, 130, 246),
                chart_stroke: Rgb(136, 132, 216),
                chart_grid: Rgb(75, 85, 99),
            },
            (PageVariant::Gradient, false) => Self {
                background: Rgb(243, 232, 255),
                surface: Rgb(250, 245, 255),
                border: Rgb(216, 180, 254),
                text: Rgb(59, 7, 100),
                muted: Rgb(126, 34, 206),
                accent: Rgb(147, 51, 234),
                chart_stroke: Rgb(192, 38, 211),
                chart_grid: Rgb(216, 180, 254),
            },
            (PageVariant::Gradient, true) => Self {
                background: Rgb(30, 58, 138),
                surface: Rgb(49, 46, 129),
                border: Rgb(99, 102, 241),
                text: Rgb(238, 242, 255),
                muted: Rgb(165, 180, 252),
                accent: Rgb(244, 114, 182),
                chart_stroke: Rgb(244, 114, 182),
                chart_grid: Rgb(99, 102, 241),
            },
            (PageVariant::Neon, false) => Self {
                background: Rgb(236, 254, 255),
                surface: Rgb(255, 255, 255),
                border: Rgb(34, 211, 238),
                text: Rgb(8, 51, 68),
                muted: Rgb(14, 116, 144),
                accent: Rgb(219, 39, 119),
                chart_stroke: Rgb(6, 182, 212),
                chart_grid: Rgb(165, 243, 252),
            },
            (PageVariant::Neon, true) => Self {
                background: Rgb(10, 10, 20),
                surface: Rgb(24, 24, 40),
                border: Rgb(0, 255, 204),
                text: Rgb(230, 255, 250),
                muted: Rgb(120, 160, 170),
                accent: Rgb(255, 0, 170),
                chart_stroke: Rgb(0, 255, 204),
                chart_grid: Rgb(60, 60, 90),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parse_round_trips_names() {
        for variant in PageVariant::ALL {
            assert_eq!(PageVariant::parse(variant.as_str()), Some(variant));
        }
        assert_eq!(PageVariant::parse("Neon "), Some(PageVariant::Neon));
        assert_eq!(PageVariant::parse("retro"), None);
    }

    #[test]
    fn next_cycles_through_every_variant() {
        assert_eq!(PageVariant::Classic.next(), PageVariant::Gradient);
        assert_eq!(PageVariant::Gradient.next(), PageVariant::Neon);
        assert_eq!(PageVariant::Neon.next(), PageVariant::Classic);
    }

    #[test]
    fn dark_flag_changes_every_variant() {
        for variant in PageVariant::ALL {
            let light = Palette::resolve(StyleConfig {
                variant,
                dark: false,
            });
            let dark = Palette::resolve(StyleConfig {
                variant,
                dark: true,
            });
            assert_ne!(light.background, dark.background, "{}", variant.as_str());
        }
    }
}
