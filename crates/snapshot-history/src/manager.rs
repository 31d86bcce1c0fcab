/// Linear undo/redo history over immutable snapshots.
///
/// Snapshots are stored whole, oldest first, with a cursor marking the
/// current one. Undo and redo only move the cursor; recording after an undo
/// discards the redo-able future before appending.
use std::fmt;

use crate::config::HistoryConfig;

/// Owns an ordered sequence of snapshots and a cursor into it.
///
/// The manager never looks inside a snapshot, so `T` can be any value the
/// owning application knows how to capture and restore. Boundary conditions
/// (nothing to undo, nothing to redo, nothing recorded) are reported as
/// `None`, never as errors.
pub struct History<T> {
    /// Recorded snapshots in chronological order.
    entries: Vec<T>,
    /// Index of the current snapshot; `None` until the first `record`.
    cursor: Option<usize>,
    /// Depth limit and other tuning.
    config: HistoryConfig,
}

impl<T> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("max_depth", &self.config.max_depth)
            .finish()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Creates an empty, unbounded history.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Creates an empty history using `config`.
    ///
    /// The config is sanitized first, so a zero depth limit behaves as one.
    pub fn with_config(mut config: HistoryConfig) -> Self {
        config.sanitize();
        Self {
            entries: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Records a new snapshot and makes it current.
    ///
    /// Any entries after the cursor (left behind by earlier undos) are
    /// dropped first, so redo is impossible until the next undo. When a
    /// depth limit is set, the oldest entries are evicted to make room.
    pub fn record(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            let discarded = self.entries.len() - keep;
            self.entries.truncate(keep);
            tracing::trace!("Discarded {discarded} redo entries on record");
        }

        self.entries.push(snapshot);

        if let Some(max) = self.config.max_depth {
            if self.entries.len() > max {
                let excess = self.entries.len() - max;
                self.entries.drain(..excess);
                tracing::debug!("Evicted {excess} oldest history entries (max_depth {max})");
            }
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one snapshot and returns it.
    ///
    /// Returns `None` without moving when the cursor is already on the
    /// oldest entry or nothing has been recorded.
    pub fn undo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1)
            }
            _ => {
                tracing::trace!("Nothing to undo");
                None
            }
        }
    }

    /// Steps forward one snapshot and returns it.
    ///
    /// Returns `None` without moving when the cursor is already on the
    /// newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if self.cursor.is_some() && next < self.entries.len() {
            self.cursor = Some(next);
            self.entries.get(next)
        } else {
            tracing::trace!("Nothing to redo");
            None
        }
    }

    /// Returns the current snapshot, or `None` if nothing was recorded.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Whether `undo` would return a snapshot.
    pub fn can_undo(&self) -> bool {
        self.undo_depth() > 0
    }

    /// Whether `redo` would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.redo_depth() > 0
    }

    /// Number of consecutive undos available.
    pub fn undo_depth(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Number of consecutive redos available.
    pub fn redo_depth(&self) -> usize {
        match self.cursor {
            Some(c) => self.entries.len() - 1 - c,
            None => 0,
        }
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of retained snapshots, including the redo-able future.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all retained snapshots, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    /// Drops every snapshot and returns to the empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Text {
        content: String,
    }

    fn text(content: &str) -> Text {
        Text {
            content: content.to_string(),
        }
    }

    fn bounded(max_depth: usize) -> History<Text> {
        History::with_config(HistoryConfig {
            max_depth: Some(max_depth),
        })
    }

    // --- Empty history ---

    #[test]
    fn test_empty_history() {
        let mut history: History<Text> = History::new();
        assert!(history.current().is_none());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.cursor(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_on_empty_appends() {
        let mut history = History::new();
        history.record(text("a"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.current(), Some(&text("a")));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    // --- Sequential recording ---

    #[test]
    fn test_current_tracks_latest_record() {
        let mut history = History::new();
        for s in ["a", "b", "c", "d"] {
            history.record(text(s));
            assert_eq!(history.current(), Some(&text(s)));
        }
    }

    #[test]
    fn test_undo_walks_back_to_oldest() {
        let mut history = History::new();
        for s in ["s1", "s2", "s3", "s4"] {
            history.record(text(s));
        }

        assert_eq!(history.undo(), Some(&text("s3")));
        assert_eq!(history.undo(), Some(&text("s2")));
        assert_eq!(history.undo(), Some(&text("s1")));
        assert!(history.undo().is_none());
        assert_eq!(history.current(), Some(&text("s1")));
    }

    // --- Boundaries ---

    #[test]
    fn test_undo_at_oldest_is_idempotent() {
        let mut history = History::new();
        history.record(text("a"));
        history.record(text("b"));
        history.undo();

        for _ in 0..3 {
            assert!(history.undo().is_none());
            assert_eq!(history.cursor(), Some(0));
            assert_eq!(history.current(), Some(&text("a")));
        }
    }

    #[test]
    fn test_redo_at_newest_is_idempotent() {
        let mut history = History::new();
        history.record(text("a"));
        history.record(text("b"));

        for _ in 0..3 {
            assert!(history.redo().is_none());
            assert_eq!(history.cursor(), Some(1));
            assert_eq!(history.current(), Some(&text("b")));
        }
    }

    // --- Branch invalidation ---

    #[test]
    fn test_record_after_undo_discards_future() {
        let mut history = History::new();
        history.record(text("A"));
        history.record(text("B"));
        history.record(text("C"));
        history.undo();
        history.undo();

        history.record(text("D"));
        assert!(history.redo().is_none());
        assert_eq!(history.current(), Some(&text("D")));
        assert_eq!(history.len(), 2);

        let remaining: Vec<&Text> = history.entries().collect();
        assert_eq!(remaining, vec![&text("A"), &text("D")]);
    }

    #[test]
    fn test_record_after_single_undo_keeps_earlier_entries() {
        let mut history = History::new();
        history.record(text("A"));
        history.record(text("B"));
        history.record(text("C"));
        history.undo();

        history.record(text("X"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.undo(), Some(&text("B")));
        assert_eq!(history.undo(), Some(&text("A")));
        assert_eq!(history.redo(), Some(&text("B")));
        assert_eq!(history.redo(), Some(&text("X")));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_at_newest_keeps_everything() {
        let mut history = History::new();
        history.record(text("A"));
        history.record(text("B"));
        history.undo();
        history.redo();

        history.record(text("C"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.undo(), Some(&text("B")));
    }

    // --- Round trip ---

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new();
        history.record(text("A"));
        history.record(text("B"));

        assert_eq!(history.undo(), Some(&text("A")));
        assert_eq!(history.redo(), Some(&text("B")));
        assert_eq!(history.current(), Some(&text("B")));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_single_entry_round_trip() {
        let mut history = History::new();
        history.record(text("A"));
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert_eq!(history.current(), Some(&text("A")));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
    }

    // --- Depths ---

    #[test]
    fn test_undo_and_redo_depths() {
        let mut history = History::new();
        for s in ["a", "b", "c", "d"] {
            history.record(text(s));
        }
        assert_eq!(history.undo_depth(), 3);
        assert_eq!(history.redo_depth(), 0);

        history.undo();
        history.undo();
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 2);
        assert!(history.can_undo());
        assert!(history.can_redo());
    }

    // --- Depth limit ---

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = bounded(3);
        for s in ["a", "b", "c", "d", "e"] {
            history.record(text(s));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current(), Some(&text("e")));
        assert_eq!(history.undo(), Some(&text("d")));
        assert_eq!(history.undo(), Some(&text("c")));
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_max_depth_applies_after_truncation() {
        let mut history = bounded(3);
        for s in ["a", "b", "c"] {
            history.record(text(s));
        }
        history.undo();
        history.undo();

        // Future is dropped before the limit is checked, so nothing is evicted.
        history.record(text("x"));
        let remaining: Vec<&Text> = history.entries().collect();
        assert_eq!(remaining, vec![&text("a"), &text("x")]);
    }

    #[test]
    fn test_zero_max_depth_keeps_current() {
        let mut history = bounded(0);
        history.record(text("a"));
        history.record(text("b"));
        assert_eq!(history.config().max_depth, Some(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&text("b")));
        assert!(history.undo().is_none());
    }

    // --- Lifecycle ---

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record(text("a"));
        history.record(text("b"));
        history.undo();

        history.clear();
        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());

        history.record(text("c"));
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.current(), Some(&text("c")));
    }

    #[test]
    fn test_editor_text_scenario() {
        let mut history = History::new();
        history.record(text("a"));
        history.record(text("ab"));
        history.record(text("abc"));

        assert_eq!(history.undo(), Some(&text("ab")));
        assert_eq!(history.undo(), Some(&text("a")));
        assert_eq!(history.redo(), Some(&text("ab")));

        history.record(text("aX"));
        assert!(history.redo().is_none());
        assert_eq!(history.current(), Some(&text("aX")));
    }

    #[test]
    fn test_debug_omits_contents() {
        let mut history = History::new();
        history.record(text("secret"));
        let dbg = format!("{history:?}");
        assert!(dbg.contains("len: 1"));
        assert!(!dbg.contains("secret"));
    }
}
