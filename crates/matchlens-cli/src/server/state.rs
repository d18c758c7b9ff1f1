//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use matchlens::Session;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The audit session being reviewed.
    pub session: Arc<RwLock<Session>>,
    /// Directory non-URL sources are resolved against.
    pub base_dir: PathBuf,
}

impl AppState {
    /// Create new application state rooted at the current directory.
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            base_dir: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Resolve a source identifier from the UI.
    ///
    /// URLs pass through. Paths resolve against `base_dir`; a leading
    /// slash is treated as server-root-relative (the UI's default source
    /// is `/mappings.json`), the same way a same-origin fetch would
    /// resolve it.
    pub fn resolve_source(&self, source: &str) -> String {
        if crate::source::is_url(source) {
            source.to_string()
        } else {
            self.base_dir
                .join(source.trim_start_matches('/'))
                .to_string_lossy()
                .into_owned()
        }
    }
}
