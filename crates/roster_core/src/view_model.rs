use crate::state::{Character, CharacterStatus, FetchFailure};

/// Snapshot of everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_text: String,
    pub filter_dead: bool,
    pub filter_alive: bool,
    pub page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// Characters of the current page that pass the active filters.
    pub visible: Vec<Character>,
    /// Size of the current page before filtering.
    pub fetched_count: usize,
    pub failure: Option<FetchFailure>,
}

/// Applies the name and status filters to one fetched page.
///
/// The name test is a case-insensitive substring match; an empty search
/// matches everything. The status test is a conjunction of the two
/// checkboxes, so ticking both leaves no status that can satisfy it and
/// the subset is empty. Filtering never looks beyond the given page.
pub fn visible_subset<'a>(
    characters: &'a [Character],
    search_text: &str,
    filter_dead: bool,
    filter_alive: bool,
) -> Vec<&'a Character> {
    let needle = search_text.to_lowercase();
    characters
        .iter()
        .filter(|character| {
            let name_matched = character.name.to_lowercase().contains(&needle);
            let status_matched = (!filter_dead || character.status == CharacterStatus::Dead)
                && (!filter_alive || character.status == CharacterStatus::Alive);
            name_matched && status_matched
        })
        .collect()
}
