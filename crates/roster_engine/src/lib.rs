//! Roster engine: upstream API client and fetch execution.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
pub use types::{
    CharacterPage, CharacterRecord, CharacterStatus, EngineEvent, FailureKind, FetchError,
    RequestId,
};
