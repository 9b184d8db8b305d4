//! Translation of an [`ImageModel`](crate::model::ImageModel) into skill
//! script lines.

mod entry;
mod generator;
pub mod mapping;

pub use entry::{format_number, SpawnEntry};
pub use generator::{generate, spawn_entries, ScriptLines, SpawnEntries};
pub use mapping::{map_position, Position};
