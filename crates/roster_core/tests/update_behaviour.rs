use std::sync::Once;

use roster_core::{
    update, AppState, Character, CharacterStatus, Effect, Msg, PageInfo,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roster_logging::initialize_for_tests);
}

fn character(id: u64, name: &str, status: CharacterStatus) -> Character {
    Character {
        id,
        name: name.to_string(),
        status,
        species: "Human".to_string(),
        gender: "unknown".to_string(),
        origin: "Earth (C-137)".to_string(),
        location: "Citadel of Ricks".to_string(),
        image: format!("https://example.com/{id}.jpeg"),
    }
}

fn page_info(has_previous: bool, has_next: bool) -> PageInfo {
    PageInfo {
        has_previous,
        has_next,
    }
}

/// Starts the app and completes the initial page-1 load.
fn loaded_state(characters: Vec<Character>, info: PageInfo) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let Effect::FetchPage { request, .. } = effects[0];
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request,
            characters,
            page_info: info,
        },
    );
    state
}

#[test]
fn started_fetches_page_one() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(effects, vec![Effect::FetchPage { request: 1, page: 1 }]);
    assert_eq!(state.view().page, 1);
}

#[test]
fn next_advances_and_fetches_new_page() {
    init_logging();
    let state = loaded_state(
        vec![character(1, "Rick Sanchez", CharacterStatus::Alive)],
        page_info(false, true),
    );

    let (state, effects) = update(state, Msg::NextPage);

    assert_eq!(state.view().page, 2);
    assert_eq!(effects, vec![Effect::FetchPage { request: 2, page: 2 }]);
}

#[test]
fn previous_is_noop_at_first_page() {
    init_logging();
    let state = loaded_state(
        vec![character(1, "Rick Sanchez", CharacterStatus::Alive)],
        page_info(false, true),
    );
    let before = state.view();

    let (state, effects) = update(state, Msg::PreviousPage);

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn next_is_noop_at_last_page() {
    init_logging();
    let state = loaded_state(
        vec![character(1, "Rick Sanchez", CharacterStatus::Alive)],
        page_info(true, false),
    );
    let before = state.view();

    let (state, effects) = update(state, Msg::NextPage);

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn previous_returns_to_earlier_page() {
    init_logging();
    let state = loaded_state(Vec::new(), page_info(false, true));
    let (state, _) = update(state, Msg::NextPage);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request: 2,
            characters: Vec::new(),
            page_info: page_info(true, true),
        },
    );

    let (state, effects) = update(state, Msg::PreviousPage);

    assert_eq!(state.view().page, 1);
    assert_eq!(effects, vec![Effect::FetchPage { request: 3, page: 1 }]);
}

#[test]
fn previous_never_steps_below_page_one() {
    init_logging();
    // Reach page 2, whose page info reports a previous page.
    let state = loaded_state(Vec::new(), page_info(false, true));
    let (state, _) = update(state, Msg::NextPage);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request: 2,
            characters: Vec::new(),
            page_info: page_info(true, true),
        },
    );

    // First press goes back to page 1; the fetch for it has not
    // resolved yet, so page_info still says has_previous.
    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.view().page, 1);
    assert_eq!(effects, vec![Effect::FetchPage { request: 3, page: 1 }]);
    assert!(state.view().has_previous);

    // A second press while that fetch is in flight must be a no-op.
    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.view().page, 1);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.view().page, 1);
    assert!(effects.is_empty());
}

#[test]
fn search_change_resets_page_and_refetches() {
    init_logging();
    // Walk to page 2 first so the reset is observable.
    let state = loaded_state(Vec::new(), page_info(false, true));
    let (state, _) = update(state, Msg::NextPage);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request: 2,
            characters: Vec::new(),
            page_info: page_info(true, true),
        },
    );

    let (state, effects) = update(state, Msg::SearchChanged("rick".to_string()));

    assert_eq!(state.view().page, 1);
    assert_eq!(state.view().search_text, "rick");
    assert_eq!(effects, vec![Effect::FetchPage { request: 3, page: 1 }]);
}

#[test]
fn search_change_on_page_one_still_refetches() {
    init_logging();
    let state = loaded_state(Vec::new(), page_info(false, true));

    let (state, effects) = update(state, Msg::SearchChanged("morty".to_string()));

    assert_eq!(state.view().page, 1);
    assert_eq!(effects, vec![Effect::FetchPage { request: 2, page: 1 }]);
}

#[test]
fn unchanged_search_text_is_noop() {
    init_logging();
    let state = loaded_state(Vec::new(), page_info(false, true));
    let (state, _) = update(state, Msg::SearchChanged("rick".to_string()));

    let (state, effects) = update(state, Msg::SearchChanged("rick".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.view().page, 1);
}

#[test]
fn filter_toggles_reset_page_and_refetch() {
    init_logging();
    for msg in [Msg::FilterDeadToggled, Msg::FilterAliveToggled] {
        let state = loaded_state(Vec::new(), page_info(false, true));
        let (state, _) = update(state, Msg::NextPage);
        let (state, _) = update(
            state,
            Msg::PageLoaded {
                request: 2,
                characters: Vec::new(),
                page_info: page_info(true, true),
            },
        );

        let (state, effects) = update(state, msg);

        assert_eq!(state.view().page, 1);
        assert_eq!(effects, vec![Effect::FetchPage { request: 3, page: 1 }]);
    }
}

#[test]
fn filter_toggle_flips_flag_both_ways() {
    init_logging();
    let state = AppState::new();

    let (state, _) = update(state, Msg::FilterDeadToggled);
    assert!(state.view().filter_dead);

    let (state, _) = update(state, Msg::FilterDeadToggled);
    assert!(!state.view().filter_dead);
}
