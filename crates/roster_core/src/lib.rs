//! Roster core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Character, CharacterStatus, FetchFailure, PageInfo, RequestId};
pub use update::update;
pub use view_model::{visible_subset, AppViewModel};
