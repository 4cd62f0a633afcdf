use crate::{Character, FetchFailure, PageInfo, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application start; kicks off the first page load.
    Started,
    /// User edited the name search box; carries the full new text.
    SearchChanged(String),
    /// User toggled the "show dead" checkbox.
    FilterDeadToggled,
    /// User toggled the "show alive" checkbox.
    FilterAliveToggled,
    /// User asked for the previous server page.
    PreviousPage,
    /// User asked for the next server page.
    NextPage,
    /// Engine delivered a page for an earlier fetch effect.
    PageLoaded {
        request: RequestId,
        characters: Vec<Character>,
        page_info: PageInfo,
    },
    /// Engine could not deliver a page.
    PageFailed {
        request: RequestId,
        failure: FetchFailure,
    },
}
