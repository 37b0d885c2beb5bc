use crate::content::ContentStore;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Store indices of the cards whose name, years or focus fuzzily match
/// `query`, in store order. A blank query keeps every card.
pub fn filter_cards(store: &ContentStore, query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..store.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    store
        .profiles()
        .iter()
        .enumerate()
        .filter(|(_, profile)| {
            [profile.name, profile.years, profile.focus]
                .iter()
                .any(|field| matcher.fuzzy_match(field, query).is_some())
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_keeps_all_cards() {
        let store = ContentStore::builtin();
        assert_eq!(filter_cards(&store, "  "), [0, 1, 2]);
    }

    #[test]
    fn fuzzy_name_match() {
        let store = ContentStore::builtin();
        assert_eq!(filter_cards(&store, "rgn"), [2]);
        assert_eq!(filter_cards(&store, "nixon"), [1]);
    }

    #[test]
    fn matches_focus_text_and_keeps_order() {
        let store = ContentStore::builtin();
        assert_eq!(filter_cards(&store, "ussr"), [2]);
        assert_eq!(filter_cards(&store, "19"), [0, 1, 2]);
    }

    #[test]
    fn no_match_is_empty() {
        let store = ContentStore::builtin();
        assert!(filter_cards(&store, "zzzz").is_empty());
    }
}
