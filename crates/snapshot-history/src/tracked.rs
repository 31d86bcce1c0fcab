/// Pairs a versioned subject with its history.
use crate::config::HistoryConfig;
use crate::manager::History;

/// A subject whose state can be captured as a snapshot and restored from one.
///
/// `capture` must not change the subject. `restore` must leave the subject in
/// a state whose `capture` equals the given snapshot.
pub trait Versioned {
    type Snapshot;

    fn capture(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// Owns a subject and a `History` of its snapshots.
///
/// Captures after every change made through `apply` and restores the
/// subject on `undo`/`redo`. The initial state is recorded on construction,
/// so the first change can always be undone.
#[derive(Debug)]
pub struct Tracked<S: Versioned> {
    subject: S,
    history: History<S::Snapshot>,
}

impl<S: Versioned> Tracked<S> {
    pub fn new(subject: S) -> Self {
        Self::with_config(subject, HistoryConfig::default())
    }

    pub fn with_config(subject: S, config: HistoryConfig) -> Self {
        let mut history = History::with_config(config);
        history.record(subject.capture());
        Self { subject, history }
    }

    /// Read access to the subject.
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Read access to the underlying history.
    pub fn history(&self) -> &History<S::Snapshot> {
        &self.history
    }

    /// Runs a state-changing operation on the subject, then records it.
    pub fn apply<R>(&mut self, change: impl FnOnce(&mut S) -> R) -> R {
        let result = change(&mut self.subject);
        self.history.record(self.subject.capture());
        result
    }

    /// Restores the previous snapshot. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.subject.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.subject.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Gives back the subject, dropping the history.
    pub fn into_inner(self) -> S {
        self.subject
    }
}
