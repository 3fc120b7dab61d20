//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! - **Project store**: one [`ProjectStore`] shared by every session.
//! - **Sessions**: one [`SessionState`] per browser session: its vote
//!   record, pending toasts, and navigation state. Keyed by the UUID in the
//!   session cookie, held only in memory.
//!
//! ## Locking
//!
//! Both maps use `parking_lot::RwLock` and no lock is held across an
//! `.await`. When a command needs both, it takes the session table first
//! and the store second; nothing takes them in the other order.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use showcase_core::{ProjectStore, VoteRecord};
use showcase_view::{Navigator, Toast};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::middleware::metrics::ApiMetrics;

/// Identifier of the session serving the current request.
///
/// Inserted into request extensions by the session middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

/// Everything the service remembers about one browser session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub votes: VoteRecord,
    /// Toasts queued by a command, shown once by the next page view.
    pub flash: Vec<Toast>,
    pub nav: Navigator,
    pub last_seen: DateTime<Utc>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            votes: VoteRecord::new(),
            flash: Vec::new(),
            nav: Navigator::new(),
            last_seen: Utc::now(),
        }
    }
}

/// Thread-safe, cloneable table of live sessions.
///
/// Bounded: creating a session beyond the cap evicts the one seen longest
/// ago.
#[derive(Debug, Clone)]
pub struct Sessions {
    data: Arc<RwLock<HashMap<Uuid, SessionState>>>,
    cap: usize,
}

impl Sessions {
    /// Create an empty table holding at most `cap` sessions.
    pub fn new(cap: usize) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            cap: cap.max(1),
        }
    }

    /// Start a new session and return its identifier.
    pub fn create(&self) -> SessionId {
        let id = Uuid::new_v4();
        let mut guard = self.data.write();
        while guard.len() >= self.cap {
            let oldest = guard
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(evicted) => {
                    guard.remove(&evicted);
                    tracing::debug!(session = %evicted, "evicted idle session");
                }
                None => break,
            }
        }
        guard.insert(id, SessionState::new());
        SessionId(id)
    }

    /// Refresh `last_seen`. Returns `false` if the session is unknown.
    pub fn touch(&self, id: SessionId) -> bool {
        match self.data.write().get_mut(&id.0) {
            Some(session) => {
                session.last_seen = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Run `f` against a session under the table's write lock.
    ///
    /// Returns `None` if the session does not exist.
    pub fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.data.write().get_mut(&id.0).map(f)
    }

    /// A copy of a session's state.
    pub fn get(&self, id: SessionId) -> Option<SessionState> {
        self.data.read().get(&id.0).cloned()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProjectStore>>,
    pub sessions: Sessions,
    pub metrics: ApiMetrics,
    pub config: AppConfig,
}

impl AppState {
    /// Default configuration: seeded with the demo projects.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Build state for `config`.
    pub fn with_config(config: AppConfig) -> Self {
        let store = if config.seed_demo {
            ProjectStore::with_demo_projects()
        } else {
            ProjectStore::new()
        };
        Self::with_store(config, store)
    }

    /// Build state around an existing store.
    pub fn with_store(config: AppConfig, store: ProjectStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            sessions: Sessions::new(config.max_sessions),
            metrics: ApiMetrics::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
