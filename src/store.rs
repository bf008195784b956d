use crate::session::SavedSession;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value persistence for session snapshots. A corrupt or missing blob
/// loads as a fresh default session rather than failing the caller.
pub trait SessionStore {
    fn load(&self) -> SavedSession;
    fn save(&self, session: &SavedSession) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "vocab-drill") {
            pd.data_dir().join("session.json")
        } else {
            PathBuf::from("vocab_drill_session.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SavedSession {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(saved) = serde_json::from_slice::<SavedSession>(&bytes) {
                return saved;
            }
        }
        SavedSession::default()
    }

    fn save(&self, session: &SavedSession) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(session).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
