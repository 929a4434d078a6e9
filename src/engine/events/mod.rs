//! EngineIntent- und EngineCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::{CancelReason, EngineCommand};
pub use intent::EngineIntent;
