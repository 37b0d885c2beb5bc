//! Static profile data and the read-only store that serves it.

use crate::domain::Axis;
use crate::error::ContentError;
use serde::Serialize;
use std::collections::HashSet;

/// Relative strength along the four instruments of power, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerDistribution {
    pub diplomatic: f64,
    pub informational: f64,
    pub military: f64,
    pub economic: f64,
}

impl PowerDistribution {
    pub const fn value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Diplomatic => self.diplomatic,
            Axis::Informational => self.informational,
            Axis::Military => self.military,
            Axis::Economic => self.economic,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.into_iter().map(|axis| (axis, self.value(axis)))
    }

    pub fn largest(&self) -> f64 {
        self.iter().map(|(_, value)| value).fold(f64::MIN, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A president's strategy record. `name` is the selection key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: &'static str,
    pub years: &'static str,
    pub focus: &'static str,
    pub grand_strategy: &'static str,
    pub national_interests: &'static [&'static str],
    pub theory: &'static str,
    pub instruments_of_power: &'static [&'static str],
    pub fas_analysis: &'static str,
    pub key_events: &'static [&'static str],
    pub power_distribution: PowerDistribution,
    pub quotes: &'static [&'static str],
    pub timeline_events: &'static [TimelineEvent],
}

impl Profile {
    /// Detail view heading, e.g. "Truman Administration (1945-1953)".
    pub fn heading(&self) -> String {
        format!("{} Administration ({})", self.name, self.years)
    }
}

/// Immutable, ordered list of profiles. Order drives next/previous.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    profiles: Vec<Profile>,
}

impl ContentStore {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, ContentError> {
        if profiles.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.name) {
                return Err(ContentError::DuplicateName(profile.name.to_string()));
            }
        }

        Ok(Self { profiles })
    }

    /// Truman, Nixon and Reagan, in that order.
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_PROFILES.to_vec(),
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|profile| profile.name == name)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.profiles)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

pub static BUILTIN_PROFILES: [Profile; 3] = [
    Profile {
        name: "Truman",
        years: "1945-1953",
        focus: "Containment and Post-WWII Recovery",
        grand_strategy: "Containment",
        national_interests: &[
            "Defense of homeland",
            "Promote democracy",
            "Prevent Soviet expansion",
        ],
        theory: "Neorealism",
        instruments_of_power: &["Military (NATO)", "Economic (Marshall Plan)", "Diplomacy"],
        fas_analysis: "High feasibility due to U.S. post-war economic and military strength. Strong acceptability both domestically and internationally. Highly suitable for stabilizing Europe and containing Soviet influence.",
        key_events: &[
            "Marshall Plan (1948)",
            "NATO Formation (1949)",
            "Korean War (1950-1953)",
        ],
        power_distribution: PowerDistribution {
            diplomatic: 80.0,
            informational: 70.0,
            military: 90.0,
            economic: 100.0,
        },
        quotes: &[
            "George Kennan's 'Long Telegram' described the Soviets as 'implacably hostile' and 'incapable of long-term cooperation with the West.'",
            "Brands (2014) highlights that Truman's 'containment' strategy fundamentally shaped the Cold War era, asserting U.S. dominance in a bipolar world order.",
            "As noted by Nuechterlein, Truman prioritized 'defense of the homeland' and 'promoting democracy,' essential national interests in the early Cold War period.",
        ],
        timeline_events: &[
            TimelineEvent {
                year: "1947",
                title: "Truman Doctrine",
                description: "U.S. policy to aid nations threatened by Soviet expansionism.",
            },
            TimelineEvent {
                year: "1948",
                title: "Marshall Plan",
                description: "Economic assistance program for European recovery.",
            },
            TimelineEvent {
                year: "1949",
                title: "NATO Formation",
                description: "Creation of the North Atlantic Treaty Organization.",
            },
            TimelineEvent {
                year: "1950",
                title: "Korean War Begins",
                description: "U.S. enters the Korean War to contain communist expansion.",
            },
        ],
    },
    Profile {
        name: "Nixon",
        years: "1969-1974",
        focus: "Détente and China Relations",
        grand_strategy: "Détente",
        national_interests: &[
            "Economic well-being",
            "Stable world order",
            "Maintain balance with USSR and China",
        ],
        theory: "Realism",
        instruments_of_power: &["Diplomacy (China, USSR)", "Military (Vietnam)", "Economic"],
        fas_analysis: "Mixed feasibility due to domestic economic challenges and Cold War complexities. High acceptability for détente with China but mixed public opinion on Vietnam. Suitable for reducing Cold War tensions.",
        key_events: &[
            "Opening to China (1972)",
            "SALT I Treaty (1972)",
            "End of Vietnam War (1973)",
        ],
        power_distribution: PowerDistribution {
            diplomatic: 100.0,
            informational: 60.0,
            military: 70.0,
            economic: 80.0,
        },
        quotes: &[
            "Nixon described his foreign policy as a 'strategy of negotiations'—seeking leverage through diplomacy to reduce global tensions (Brands, 2014).",
            "'China's role in the world has changed, and America must adjust.' Nixon's move to open relations with China in 1972 was a pivotal geopolitical shift (Nye, 2015).",
            "Détente was 'a calculated blend of hard and soft power,' focusing on managing relations with both China and the USSR (Elman & Jensen, 2014).",
        ],
        timeline_events: &[
            TimelineEvent {
                year: "1969",
                title: "Nixon Doctrine",
                description: "Policy of 'Vietnamization' of the Vietnam War.",
            },
            TimelineEvent {
                year: "1972",
                title: "Visit to China",
                description: "Nixon's historic visit to the People's Republic of China.",
            },
            TimelineEvent {
                year: "1972",
                title: "SALT I Treaty",
                description: "Strategic Arms Limitation Talks agreement with the Soviet Union.",
            },
            TimelineEvent {
                year: "1973",
                title: "Paris Peace Accords",
                description: "Agreement to end direct U.S. involvement in the Vietnam War.",
            },
        ],
    },
    Profile {
        name: "Reagan",
        years: "1981-1989",
        focus: "Confrontation with USSR",
        grand_strategy: "Confrontation with USSR",
        national_interests: &[
            "Defense of homeland",
            "Promote democracy globally",
            "Maintain military and economic superiority",
            "Undermine Soviet influence",
        ],
        theory: "Offensive Realism",
        instruments_of_power: &[
            "Military (SDI)",
            "Economic sanctions",
            "Diplomacy (arms reduction)",
        ],
        fas_analysis: "Feasibility was challenging due to high defense spending (SDI) and Cold War pressures. Acceptability strong domestically with Reagan's 'evil empire' rhetoric but raised concerns internationally. Suitable for increasing pressure on the USSR.",
        key_events: &[
            "Strategic Defense Initiative (1983)",
            "Reykjavík Summit (1986)",
            "Fall of Berlin Wall (1989)",
        ],
        power_distribution: PowerDistribution {
            diplomatic: 70.0,
            informational: 90.0,
            military: 100.0,
            economic: 80.0,
        },
        quotes: &[
            "Reagan's Strategic Defense Initiative (SDI) symbolized 'hard power at its peak,' challenging the Soviet Union's military capabilities (Brands, 2014).",
            "Reagan framed the Cold War as 'a moral struggle between good and evil,' emphasizing ideological confrontation (Nuechterlein, 2001).",
            "Reykjavík Summit was a turning point in arms control, showcasing Reagan's 'dual-use' of military pressure and diplomatic outreach (Nye, 2009).",
        ],
        timeline_events: &[
            TimelineEvent {
                year: "1981",
                title: "Reagan Doctrine",
                description: "Policy of supporting anti-communist movements worldwide.",
            },
            TimelineEvent {
                year: "1983",
                title: "SDI Announced",
                description: "Unveiling of the Strategic Defense Initiative ('Star Wars').",
            },
            TimelineEvent {
                year: "1985",
                title: "Geneva Summit",
                description: "First meeting between Reagan and Soviet leader Gorbachev.",
            },
            TimelineEvent {
                year: "1987",
                title: "INF Treaty",
                description: "Intermediate-Range Nuclear Forces Treaty signed with the USSR.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_is_valid() {
        let store = ContentStore::builtin();
        let validated = ContentStore::new(store.profiles().to_vec());
        assert_eq!(validated, Ok(store));
    }

    #[test]
    fn builtin_order_is_truman_nixon_reagan() {
        let store = ContentStore::builtin();
        let names: Vec<_> = store.profiles().iter().map(|p| p.name).collect();
        assert_eq!(names, ["Truman", "Nixon", "Reagan"]);
    }

    #[test]
    fn every_profile_has_four_timeline_events() {
        for profile in ContentStore::builtin().profiles() {
            assert_eq!(profile.timeline_events.len(), 4, "{}", profile.name);
        }
    }

    #[test]
    fn empty_store_is_rejected() {
        assert_eq!(ContentStore::new(Vec::new()), Err(ContentError::Empty));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let truman = BUILTIN_PROFILES[0].clone();
        let result = ContentStore::new(vec![truman.clone(), truman]);
        assert_eq!(result, Err(ContentError::DuplicateName("Truman".to_string())));
    }

    #[test]
    fn lookup_by_name() {
        let store = ContentStore::builtin();
        assert_eq!(store.index_of("Nixon"), Some(1));
        assert_eq!(store.index_of("Reagan"), Some(2));
        assert_eq!(store.index_of("Carter"), None);
    }

    #[test]
    fn heading_joins_name_and_years() {
        assert_eq!(
            BUILTIN_PROFILES[0].heading(),
            "Truman Administration (1945-1953)"
        );
    }

    #[test]
    fn largest_axis_value() {
        assert!((BUILTIN_PROFILES[1].power_distribution.largest() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn json_uses_camel_case_field_names() -> Result<(), serde_json::Error> {
        let json = ContentStore::builtin().to_json_pretty()?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value[0]["grandStrategy"], "Containment");
        assert_eq!(value[0]["powerDistribution"]["economic"], 100.0);
        assert_eq!(value[2]["timelineEvents"][3]["title"], "INF Treaty");
        assert!(value[0].get("grand_strategy").is_none());
        Ok(())
    }
}
