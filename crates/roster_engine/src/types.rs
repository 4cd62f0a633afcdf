use serde::Deserialize;
use thiserror::Error;

pub type RequestId = u64;

/// Life status as reported by the API ("Alive", "Dead", "unknown").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    /// Catch-all: the API spells this "unknown", and any unexpected
    /// value decodes here instead of failing the whole page.
    #[serde(other)]
    Unknown,
}

/// One character record, flattened from the wire layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub image: String,
}

/// One server page plus its pagination booleans, derived from the
/// presence of the API's prev/next links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPage {
    pub characters: Vec<CharacterRecord>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("undecodable response body")]
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageFetched {
        request: RequestId,
        page: u32,
        result: Result<CharacterPage, FetchError>,
    },
}
