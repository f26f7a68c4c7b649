//! Browser-storage equivalent: a small JSON document in the user's data dir.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ClientError;

const STATE_DIR: &str = "caramel-gallery";
const STATE_FILE: &str = "state.json";

/// One cached chat answer, keyed by the normalized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedReply {
    pub key: String,
    pub reply: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalState {
    #[serde(default)]
    pub session_id: Option<String>,
    /// Oldest first.
    #[serde(default)]
    pub chat_cache: VecDeque<CachedReply>,
    #[serde(default)]
    pub treat_high_score: u32,
}

impl LocalState {
    /// `<data_local_dir>/caramel-gallery/state.json`.
    ///
    /// # Errors
    /// Returns [`ClientError::NoDataDir`] if the platform has no data directory.
    pub fn default_path() -> Result<PathBuf, ClientError> {
        dirs::data_local_dir()
            .map(|dir| dir.join(STATE_DIR).join(STATE_FILE))
            .ok_or(ClientError::NoDataDir)
    }

    /// Reads the state file. A missing file is a fresh state; an unreadable
    /// document is discarded with a warning.
    ///
    /// # Errors
    /// Returns an error only if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ClientError::io(path, e)),
        };
        match serde_json::from_slice(&bytes) {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt local state, starting fresh");
                Ok(Self::default())
            },
        }
    }

    /// Writes the state file, creating its directory.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::io(parent, e))?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ClientError::io(path, e))
    }

    /// Session id, generated on first use.
    pub fn session_id(&mut self) -> &str {
        self.session_id.get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
    }

    /// Raises the stored high score; returns whether it changed.
    pub fn record_high_score(&mut self, score: u32) -> bool {
        if score > self.treat_high_score {
            self.treat_high_score = score;
            true
        } else {
            false
        }
    }
}
