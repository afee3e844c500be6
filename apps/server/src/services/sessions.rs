//! In-memory store for drill sessions.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use drill_core::{Drill, Progress, SegmentSet, Tolerance};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::SessionView;

/// One learner's drill plus its grading settings.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub drill: Drill,
    pub tolerance: Tolerance,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            step: self.drill.step(),
            total_steps: self.drill.segments().len(),
            target: self.drill.current_target().to_string(),
            reference: self.drill.current_reference().to_string(),
            full_target: self.drill.full_target().to_string(),
            finished: self.drill.is_finished(),
            tolerance: self.tolerance,
            progress: self.drill.progress(),
            created_at: self.created_at,
            last_active_at: self.last_active_at,
        }
    }
}

/// Sessions keyed by ID. Nothing is persisted.
///
/// Sessions idle longer than the TTL are invisible to `get` and are dropped
/// whenever the store takes its write lock.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a session and drop any that have been idle past the TTL.
    pub async fn create(
        &self,
        segments: SegmentSet,
        tolerance: Tolerance,
        progress: Progress,
    ) -> SessionView {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            drill: Drill::with_progress(segments, progress),
            tolerance,
            created_at: now,
            last_active_at: now,
        };
        let view = session.view();

        let mut sessions = self.sessions.write().await;
        self.purge_expired(&mut sessions, now);
        sessions.insert(session.id, session);

        view
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionView> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|s| !self.is_expired(s, now))
            .map(Session::view)
    }

    /// Apply `f` to a session under the write lock, marking it active.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Option<(T, SessionView)> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.purge_expired(&mut sessions, now);
        let session = sessions.get_mut(&id)?;
        session.last_active_at = now;
        let result = f(session);
        Some((result, session.view()))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.last_active_at > self.ttl
    }

    fn purge_expired(&self, sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!("Expired {} idle sessions", expired);
        }
    }
}
