use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flip7_core::game::session::Session;
use flip7_core::game::snapshot::SessionSnapshot;
use thiserror::Error;
use tracing::{debug, warn};

pub const STATE_ENV_VAR: &str = "FLIP7_STATE";
pub const DEFAULT_STATE_FILE: &str = "flip7-session.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode session state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where the session snapshot lives between invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// `--state` beats `FLIP7_STATE` beats the default file name.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| env::var(STATE_ENV_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));
        Self { path }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable file means a fresh session; a readable but
    /// corrupt one falls back per field.
    pub fn load(&self) -> Session {
        match fs::read_to_string(&self.path) {
            Ok(json) => SessionSnapshot::from_json(&json).restore(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved session, starting fresh");
                Session::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read saved session, starting fresh");
                Session::new()
            }
        }
    }

    /// Fire-and-forget: a failed write is logged and never aborts the
    /// command or rolls back the in-memory session.
    pub fn save(&self, session: &Session) {
        if let Err(err) = self.try_save(session) {
            warn!(error = %err, "session state not saved");
        }
    }

    fn try_save(&self, session: &Session) -> Result<(), StoreError> {
        let json = SessionSnapshot::to_json(session)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
