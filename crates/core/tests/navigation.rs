use grand_strategy_core::content::BUILTIN_PROFILES;
use grand_strategy_core::{
    Action, ContentStore, PaneView, PresentationShell, Profile, SideEffect, Tab, UiState,
};

const NAMES: [&str; 7] = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf"];

fn store_of(count: usize) -> ContentStore {
    let profiles: Vec<Profile> = NAMES
        .iter()
        .take(count)
        .map(|&name| Profile {
            name,
            ..BUILTIN_PROFILES[0].clone()
        })
        .collect();
    ContentStore::new(profiles).unwrap()
}

fn active_name(state: &UiState, store: &ContentStore) -> Option<&'static str> {
    state.active_profile(store).map(|profile| profile.name)
}

#[test]
fn next_applied_n_times_returns_to_start() {
    for count in 1..=NAMES.len() {
        let store = store_of(count);
        for start in NAMES.iter().take(count) {
            let mut state = UiState::new();
            state.apply(Action::Select(start), &store);
            for _ in 0..count {
                state.apply(Action::Next, &store);
            }
            assert_eq!(active_name(&state, &store), Some(*start), "n = {count}");
        }
    }
}

#[test]
fn previous_undoes_next() {
    for count in 1..=NAMES.len() {
        let store = store_of(count);
        for start in NAMES.iter().take(count) {
            let mut state = UiState::new();
            state.apply(Action::Select(start), &store);
            state.apply(Action::Next, &store);
            state.apply(Action::Previous, &store);
            assert_eq!(active_name(&state, &store), Some(*start));
        }
    }
}

#[test]
fn builtin_navigation_scenario() {
    let store = ContentStore::builtin();
    let mut state = UiState::new();

    state.apply(Action::Select("Nixon"), &store);
    state.apply(Action::Next, &store);
    assert_eq!(active_name(&state, &store), Some("Reagan"));

    state.apply(Action::Next, &store);
    assert_eq!(active_name(&state, &store), Some("Truman"));

    state.apply(Action::Previous, &store);
    assert_eq!(active_name(&state, &store), Some("Reagan"));
}

#[test]
fn detail_view_scenario() {
    let store = ContentStore::builtin();
    let shell = PresentationShell::default();
    let mut state = UiState::new();
    assert!(!state.is_open());

    let effect = state.apply(Action::Select("Truman"), &store);
    assert_eq!(effect, Some(SideEffect::LockBackground));
    assert!(state.is_open());
    assert_eq!(state.active_tab(), Tab::Overview);

    state.apply(Action::SwitchTab(Tab::Events), &store);
    let pane = shell.compose(&store, &state).overlay.map(|overlay| overlay.pane);
    match pane {
        Some(PaneView::Events { timeline, .. }) => assert_eq!(timeline.len(), 4),
        other => panic!("expected events pane, got {other:?}"),
    }

    let effect = state.apply(Action::Close, &store);
    assert_eq!(effect, Some(SideEffect::UnlockBackground));
    assert!(!state.is_open());
    assert!(shell.compose(&store, &state).overlay.is_none());
}
