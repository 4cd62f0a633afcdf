//! Serde view of the upstream character API's JSON.

use serde::Deserialize;

use crate::{CharacterPage, CharacterRecord, CharacterStatus};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPage {
    info: ApiPageLinks,
    results: Vec<ApiCharacter>,
}

/// The `info` object carries prev/next as nullable URLs; only their
/// presence matters here.
#[derive(Debug, Deserialize)]
struct ApiPageLinks {
    prev: Option<String>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiCharacter {
    id: u64,
    name: String,
    status: CharacterStatus,
    species: String,
    gender: String,
    origin: ApiLocationRef,
    location: ApiLocationRef,
    image: String,
}

#[derive(Debug, Deserialize)]
struct ApiLocationRef {
    name: String,
}

impl ApiPage {
    pub(crate) fn into_page(self) -> CharacterPage {
        CharacterPage {
            has_previous: self.info.prev.is_some(),
            has_next: self.info.next.is_some(),
            characters: self
                .results
                .into_iter()
                .map(ApiCharacter::into_record)
                .collect(),
        }
    }
}

impl ApiCharacter {
    fn into_record(self) -> CharacterRecord {
        CharacterRecord {
            id: self.id,
            name: self.name,
            status: self.status,
            species: self.species,
            gender: self.gender,
            origin: self.origin.name,
            location: self.location.name,
            image: self.image,
        }
    }
}
