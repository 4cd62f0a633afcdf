use std::sync::mpsc;
use std::thread;

use roster_core::{Character, Effect, FetchFailure, Msg, PageInfo};
use roster_engine::{
    CharacterRecord, EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings,
};
use roster_logging::{roster_info, roster_warn};

/// Executes controller effects against the engine and feeds engine
/// events back into the message channel as controller messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: FetchSettings) -> Result<Self, FetchError> {
        let (engine, event_rx) = EngineHandle::start(settings)?;
        spawn_event_bridge(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request, page } => {
                    roster_info!("FetchPage request={request} page={page}");
                    self.engine.fetch_page(request, page);
                }
            }
        }
    }
}

fn spawn_event_bridge(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::PageFetched {
                    request,
                    page,
                    result,
                } => match result {
                    Ok(fetched) => Msg::PageLoaded {
                        request,
                        characters: fetched.characters.into_iter().map(map_character).collect(),
                        page_info: PageInfo {
                            has_previous: fetched.has_previous,
                            has_next: fetched.has_next,
                        },
                    },
                    Err(err) => {
                        roster_warn!("page {page} fetch failed: {err}");
                        Msg::PageFailed {
                            request,
                            failure: map_failure(err.kind),
                        }
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn map_character(record: CharacterRecord) -> Character {
    Character {
        id: record.id,
        name: record.name,
        status: map_status(record.status),
        species: record.species,
        gender: record.gender,
        origin: record.origin,
        location: record.location,
        image: record.image,
    }
}

fn map_status(status: roster_engine::CharacterStatus) -> roster_core::CharacterStatus {
    match status {
        roster_engine::CharacterStatus::Alive => roster_core::CharacterStatus::Alive,
        roster_engine::CharacterStatus::Dead => roster_core::CharacterStatus::Dead,
        roster_engine::CharacterStatus::Unknown => roster_core::CharacterStatus::Unknown,
    }
}

fn map_failure(kind: FailureKind) -> FetchFailure {
    match kind {
        FailureKind::HttpStatus(status) => FetchFailure::Api { status },
        FailureKind::Decode => FetchFailure::BadPayload,
        FailureKind::Timeout | FailureKind::Network => FetchFailure::Network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_maps_to_api_failure() {
        assert_eq!(
            map_failure(FailureKind::HttpStatus(404)),
            FetchFailure::Api { status: 404 }
        );
    }

    #[test]
    fn transport_failures_map_to_network() {
        assert_eq!(map_failure(FailureKind::Timeout), FetchFailure::Network);
        assert_eq!(map_failure(FailureKind::Network), FetchFailure::Network);
    }

    #[test]
    fn character_mapping_keeps_all_fields() {
        let record = CharacterRecord {
            id: 2,
            name: "Morty Smith".to_string(),
            status: roster_engine::CharacterStatus::Alive,
            species: "Human".to_string(),
            gender: "Male".to_string(),
            origin: "Earth (C-137)".to_string(),
            location: "Citadel of Ricks".to_string(),
            image: "https://example.com/avatar/2.jpeg".to_string(),
        };

        let character = map_character(record);

        assert_eq!(character.id, 2);
        assert_eq!(character.name, "Morty Smith");
        assert_eq!(character.status, roster_core::CharacterStatus::Alive);
        assert_eq!(character.origin, "Earth (C-137)");
        assert_eq!(character.location, "Citadel of Ricks");
        assert_eq!(character.image, "https://example.com/avatar/2.jpeg");
    }
}
