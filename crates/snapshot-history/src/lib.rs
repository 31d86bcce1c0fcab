/// Linear undo/redo history over immutable state snapshots.
///
/// Provides a `History` that stores whole snapshots with a cursor, discards
/// the redo-able future when a new snapshot is recorded after an undo, and
/// optionally caps its depth. `Tracked` pairs a `Versioned` subject with a
/// history for applications that want capture and restore wired up.
pub mod config;
pub mod manager;
pub mod tracked;

pub use config::HistoryConfig;
pub use manager::History;
pub use tracked::{Tracked, Versioned};
