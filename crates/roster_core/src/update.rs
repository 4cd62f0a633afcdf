use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![fetch_current(&mut state)],
        Msg::SearchChanged(text) => {
            if text == state.search_text() {
                Vec::new()
            } else {
                state.set_search_text(text);
                reset_and_fetch(&mut state)
            }
        }
        Msg::FilterDeadToggled => {
            state.toggle_filter_dead();
            reset_and_fetch(&mut state)
        }
        Msg::FilterAliveToggled => {
            state.toggle_filter_alive();
            reset_and_fetch(&mut state)
        }
        Msg::PreviousPage => {
            // While a fetch for page 1 is still in flight, page_info is
            // the previous page's and has_previous alone would allow
            // stepping below page 1.
            if state.page_info().has_previous && state.page() > 1 {
                state.set_page(state.page() - 1);
                vec![fetch_current(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::NextPage => {
            if state.page_info().has_next {
                state.set_page(state.page() + 1);
                vec![fetch_current(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded {
            request,
            characters,
            page_info,
        } => {
            if state.is_latest(request) {
                state.apply_page(characters, page_info);
            }
            Vec::new()
        }
        Msg::PageFailed { request, failure } => {
            if state.is_latest(request) {
                state.apply_failure(failure);
            }
            Vec::new()
        }
    };

    (state, effects)
}

// Any search or filter edit lands the user back on page 1 and refetches
// it, even when the page was already 1.
fn reset_and_fetch(state: &mut AppState) -> Vec<Effect> {
    state.set_page(1);
    vec![fetch_current(state)]
}

fn fetch_current(state: &mut AppState) -> Effect {
    Effect::FetchPage {
        request: state.next_request(),
        page: state.page(),
    }
}
