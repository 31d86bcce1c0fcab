/// Parses scripted steps and replays them against a subject's history.
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use snapshot_history::{History, HistoryConfig, Tracked};

use crate::subjects::{EditorState, Game};

/// One step of an editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStep {
    Type(String),
    Move(usize),
    Save,
    Undo,
    Redo,
}

impl FromStr for EditorStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some(("type", text)) => Ok(Self::Type(text.to_string())),
            Some(("move", pos)) => {
                let pos = pos
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid cursor position '{pos}'"))?;
                Ok(Self::Move(pos))
            }
            None => match s {
                "save" => Ok(Self::Save),
                "undo" => Ok(Self::Undo),
                "redo" => Ok(Self::Redo),
                _ => bail!("Unknown editor step '{s}'"),
            },
            Some(_) => bail!("Unknown editor step '{s}'"),
        }
    }
}

/// One step of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStep {
    Play {
        level: u32,
        health: u32,
        position: (i32, i32),
    },
    Undo,
    Redo,
}

impl FromStr for GameStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "undo" => return Ok(Self::Undo),
            "redo" => return Ok(Self::Redo),
            _ => {}
        }

        let args = s
            .strip_prefix("play:")
            .ok_or_else(|| anyhow!("Unknown game step '{s}'"))?;
        let fields: Vec<&str> = args.split(',').map(str::trim).collect();
        let [level, health, x, y] = fields.as_slice() else {
            bail!("Expected play:<level>,<health>,<x>,<y>, got '{s}'");
        };

        Ok(Self::Play {
            level: level.parse().context("Invalid level")?,
            health: health.parse().context("Invalid health")?,
            position: (
                x.parse().context("Invalid x position")?,
                y.parse().context("Invalid y position")?,
            ),
        })
    }
}

/// Parses every step, naming the offending one on failure.
pub fn parse_steps<T>(raw: &[String]) -> Result<Vec<T>>
where
    T: FromStr<Err = anyhow::Error>,
{
    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            s.parse()
                .with_context(|| format!("Failed to parse step {} ('{s}')", i + 1))
        })
        .collect()
}

/// Replays an editor session and returns one output line per step.
///
/// The editor state is an immutable value: each change produces a new
/// state which is recorded, and undo/redo hand back a recorded state.
pub fn run_editor(steps: &[EditorStep], config: HistoryConfig) -> Vec<String> {
    let mut history = History::with_config(config);
    let mut state = EditorState::default();
    history.record(state.clone());

    let mut lines = vec![format!("Initial state: {state}")];
    for step in steps {
        let line = match step {
            EditorStep::Type(text) => {
                state = state.typed(text);
                history.record(state.clone());
                format!("After typing {text:?}: {state}")
            }
            EditorStep::Move(pos) => {
                state = state.moved_to(*pos);
                history.record(state.clone());
                format!("After moving cursor: {state}")
            }
            EditorStep::Save => {
                state = state.saved();
                history.record(state.clone());
                format!("After save: {state}")
            }
            EditorStep::Undo => match history.undo() {
                Some(previous) => {
                    state = previous.clone();
                    format!("Undo: {state}")
                }
                None => "Nothing to undo.".to_string(),
            },
            EditorStep::Redo => match history.redo() {
                Some(next) => {
                    state = next.clone();
                    format!("Redo: {state}")
                }
                None => "Nothing to redo.".to_string(),
            },
        };
        tracing::debug!(cursor = ?history.cursor(), len = history.len(), "{line}");
        lines.push(line);
    }
    lines
}

/// Replays a game session and returns one output line per step.
pub fn run_game(steps: &[GameStep], config: HistoryConfig) -> Vec<String> {
    let mut game = Tracked::with_config(Game::default(), config);

    let mut lines = vec![format!("Game started at {}", game.subject())];
    for step in steps {
        let line = match *step {
            GameStep::Play {
                level,
                health,
                position,
            } => {
                game.apply(|g| g.play(level, health, position));
                format!("Playing... reached {}", game.subject())
            }
            GameStep::Undo if game.undo() => format!("Game restored to {}", game.subject()),
            GameStep::Undo => "Nothing to undo.".to_string(),
            GameStep::Redo if game.redo() => format!("Game restored to {}", game.subject()),
            GameStep::Redo => "Nothing to redo.".to_string(),
        };
        tracing::debug!(cursor = ?game.history().cursor(), "{line}");
        lines.push(line);
    }
    lines
}
