/// Demonstration subjects replayed by the CLI.
///
/// `EditorState` is an immutable value changed only by copying; `Game` is a
/// mutable object that saves and restores itself through a memento.
use std::fmt;

use snapshot_history::Versioned;

/// Code editor state. Never edited in place; every change is a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    pub content: String,
    pub cursor_position: usize,
    pub unsaved_changes: bool,
}

/// Partial update for `EditorState::copy_with`. `None` keeps the old value.
#[derive(Debug, Clone, Default)]
pub struct EditorChange {
    pub content: Option<String>,
    pub cursor_position: Option<usize>,
    pub unsaved_changes: Option<bool>,
}

impl EditorState {
    /// Returns a copy with the fields of `change` applied.
    pub fn copy_with(&self, change: EditorChange) -> Self {
        Self {
            content: change.content.unwrap_or_else(|| self.content.clone()),
            cursor_position: change.cursor_position.unwrap_or(self.cursor_position),
            unsaved_changes: change.unsaved_changes.unwrap_or(self.unsaved_changes),
        }
    }

    /// Inserts `text` at the cursor and moves the cursor past it.
    pub fn typed(&self, text: &str) -> Self {
        let at = self.cursor_position.min(self.content.chars().count());
        let mut content: String = self.content.chars().take(at).collect();
        content.push_str(text);
        content.extend(self.content.chars().skip(at));
        self.copy_with(EditorChange {
            content: Some(content),
            cursor_position: Some(at + text.chars().count()),
            unsaved_changes: Some(true),
        })
    }

    /// Moves the cursor, clamped to the content length.
    pub fn moved_to(&self, position: usize) -> Self {
        self.copy_with(EditorChange {
            cursor_position: Some(position.min(self.content.chars().count())),
            ..EditorChange::default()
        })
    }

    pub fn saved(&self) -> Self {
        self.copy_with(EditorChange {
            unsaved_changes: Some(false),
            ..EditorChange::default()
        })
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content: {:?}, cursor: {}, unsaved: {}",
            self.content, self.cursor_position, self.unsaved_changes
        )
    }
}

/// Saved game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMemento {
    pub level: u32,
    pub health: u32,
    pub position: (i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    level: u32,
    health: u32,
    position: (i32, i32),
}

impl Default for Game {
    fn default() -> Self {
        Self {
            level: 1,
            health: 100,
            position: (0, 0),
        }
    }
}

impl Game {
    pub fn play(&mut self, level: u32, health: u32, position: (i32, i32)) {
        self.level = level;
        self.health = health;
        self.position = position;
    }
}

impl Versioned for Game {
    type Snapshot = GameMemento;

    fn capture(&self) -> GameMemento {
        GameMemento {
            level: self.level,
            health: self.health,
            position: self.position,
        }
    }

    fn restore(&mut self, snapshot: &GameMemento) {
        self.level = snapshot.level;
        self.health = snapshot.health;
        self.position = snapshot.position;
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {} with health {} at position ({}, {})",
            self.level, self.health, self.position.0, self.position.1
        )
    }
}
