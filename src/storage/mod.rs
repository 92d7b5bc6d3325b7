//! Persistence of the play history
//!
//! The history maps each daily key to that day's session snapshot and lives
//! under a single namespace in a [`Store`]. Saves from a running session go
//! through the [`SaveQueue`] so they are applied one at a time, in order.

mod history;
mod queue;
mod snapshot;
mod store;

pub use history::History;
pub use queue::SaveQueue;
pub use snapshot::Snapshot;
pub use store::{GAME_NAMESPACE, JsonFileStore, MemoryStore, Store};
