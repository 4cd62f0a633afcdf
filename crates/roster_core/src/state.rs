use std::fmt;

use crate::view_model::{visible_subset, AppViewModel};

/// Identifier attached to every issued fetch. Responses carrying an id
/// older than the latest issued one are discarded on arrival.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    /// Display form, matching the upstream API's casing.
    pub fn label(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

/// One character record as fetched; never mutated after arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub gender: String,
    /// Name of the origin location.
    pub origin: String,
    /// Name of the last known location.
    pub location: String,
    /// Portrait image URI.
    pub image: String,
}

/// Pagination metadata for the current page, derived from the presence
/// of the API's prev/next links. Both false until the first load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub has_previous: bool,
    pub has_next: bool,
}

/// Why the most recent fetch did not produce data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport-level failure (connection, DNS, timeout).
    Network,
    /// The API answered with a non-success status.
    Api { status: u16 },
    /// The API answered 2xx but the body did not decode.
    BadPayload,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network => write!(f, "network error"),
            FetchFailure::Api { status } => write!(f, "API error (status {status})"),
            FetchFailure::BadPayload => write!(f, "unreadable API response"),
        }
    }
}

/// Complete controller state. Fields are only mutated through
/// [`crate::update`]; the UI reads a projection via [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    search_text: String,
    filter_dead: bool,
    filter_alive: bool,
    page: u32,
    characters: Vec<Character>,
    page_info: PageInfo,
    last_failure: Option<FetchFailure>,
    latest_request: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filter_dead: false,
            filter_alive: false,
            page: 1,
            characters: Vec::new(),
            page_info: PageInfo::default(),
            last_failure: None,
            latest_request: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the state to what the UI needs for one frame, including
    /// the filtered visible subset of the current page.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_text: self.search_text.clone(),
            filter_dead: self.filter_dead,
            filter_alive: self.filter_alive,
            page: self.page,
            has_previous: self.page_info.has_previous,
            has_next: self.page_info.has_next,
            visible: visible_subset(
                &self.characters,
                &self.search_text,
                self.filter_dead,
                self.filter_alive,
            )
            .into_iter()
            .cloned()
            .collect(),
            fetched_count: self.characters.len(),
            failure: self.last_failure,
        }
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        self.search_text = text;
        self.dirty = true;
    }

    pub(crate) fn toggle_filter_dead(&mut self) {
        self.filter_dead = !self.filter_dead;
        self.dirty = true;
    }

    pub(crate) fn toggle_filter_alive(&mut self) {
        self.filter_alive = !self.filter_alive;
        self.dirty = true;
    }

    pub(crate) fn page(&self) -> u32 {
        self.page
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        debug_assert!(page >= 1);
        self.page = page;
        self.dirty = true;
    }

    pub(crate) fn page_info(&self) -> PageInfo {
        self.page_info
    }

    /// Issues a fresh request id; everything issued before is now stale.
    pub(crate) fn next_request(&mut self) -> RequestId {
        self.latest_request += 1;
        self.latest_request
    }

    pub(crate) fn is_latest(&self, request: RequestId) -> bool {
        request == self.latest_request
    }

    /// Replaces the fetched page wholesale and clears any stored failure.
    pub(crate) fn apply_page(&mut self, characters: Vec<Character>, page_info: PageInfo) {
        self.characters = characters;
        self.page_info = page_info;
        self.last_failure = None;
        self.dirty = true;
    }

    /// Records a failed fetch. The previously fetched page and its
    /// pagination metadata stay on display.
    pub(crate) fn apply_failure(&mut self, failure: FetchFailure) {
        self.last_failure = Some(failure);
        self.dirty = true;
    }
}
