//! JSON persistence for game state.
//!
//! Strictly a host concern: the core never touches the filesystem. One
//! game per file, `<games_dir>/<game_id>.json`, pretty-printed so a
//! match can be audited with ordinary text tools.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::game::GameState;

/// A directory of persisted games.
#[derive(Debug, Clone)]
pub struct GameStore {
    /// Directory holding one JSON file per game.
    dir: PathBuf,
}

impl GameStore {
    /// Create a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file backing a game id.
    #[must_use]
    pub fn path(&self, game_id: &str) -> PathBuf {
        self.dir.join(format!("{game_id}.json"))
    }

    /// Persist a brand-new game.
    ///
    /// # Errors
    ///
    /// Returns `GameAlreadyExists` if a game with this id is already
    /// stored, or `Io` on filesystem failure.
    pub fn create(&self, state: &GameState) -> EngineResult<()> {
        if self.path(&state.game_id).exists() {
            return Err(EngineError::GameAlreadyExists {
                game_id: state.game_id.clone(),
            });
        }
        fs::create_dir_all(&self.dir).map_err(io_error)?;
        self.write(state)
    }

    /// Load a game by id.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if no such game is stored, or `Io` if the
    /// file cannot be read or parsed.
    pub fn load(&self, game_id: &str) -> EngineResult<GameState> {
        let path = self.path(game_id);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(EngineError::GameNotFound {
                    game_id: game_id.to_string(),
                });
            }
            Err(err) => return Err(io_error(err)),
        };
        serde_json::from_str(&json).map_err(|err| EngineError::Io {
            detail: format!("game file {} is corrupt: {err}", path.display()),
        })
    }

    /// Overwrite the stored state of an existing game.
    ///
    /// # Errors
    ///
    /// Returns `Io` on serialization or filesystem failure.
    pub fn save(&self, state: &GameState) -> EngineResult<()> {
        self.write(state)
    }

    /// List the ids of all stored games.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be read.
    pub fn list(&self) -> EngineResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn write(&self, state: &GameState) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(state).map_err(|err| EngineError::Io {
            detail: format!("cannot serialize game '{}': {err}", state.game_id),
        })?;
        write_atomic(&self.path(&state.game_id), &json).map_err(io_error)
    }
}

/// Write via a sibling temp file and rename, so a crash mid-write never
/// leaves a truncated game file.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

fn io_error(err: io::Error) -> EngineError {
    EngineError::Io {
        detail: err.to_string(),
    }
}
