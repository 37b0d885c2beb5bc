use serde::Serialize;

/// Panes of the detail view, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Strategy,
    Events,
    Analysis,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Strategy, Self::Events, Self::Analysis];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Strategy => "strategy",
            Self::Events => "events",
            Self::Analysis => "analysis",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Strategy => 1,
            Self::Events => 2,
            Self::Analysis => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Strategy),
            2 => Some(Self::Events),
            3 => Some(Self::Analysis),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Strategy => "Strategy",
            Self::Events => "Key Events",
            Self::Analysis => "Analysis",
        }
    }
}

/// The four instruments of national power plotted on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Diplomatic,
    Informational,
    Military,
    Economic,
}

impl Axis {
    /// Plot order; the first axis points straight up.
    pub const ALL: [Self; 4] = [
        Self::Diplomatic,
        Self::Informational,
        Self::Military,
        Self::Economic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diplomatic => "diplomatic",
            Self::Informational => "informational",
            Self::Military => "military",
            Self::Economic => "economic",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Diplomatic => "Diplomatic",
            Self::Informational => "Informational",
            Self::Military => "Military",
            Self::Economic => "Economic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_index_matches_tab_bar_order() {
        for (index, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), index);
            assert_eq!(Tab::from_index(index), Some(*tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn default_tab_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }
}
