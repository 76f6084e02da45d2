//! Fight sessions keyed by character.
//!
//! ```text
//! SessionRegistry
//!   ├─ RwLock<HashMap<CharacterId, Arc<Mutex<FightSession>>>>
//!   └─ broadcast::Sender<SessionEvent>
//! ```
//!
//! The map lock is only held to look a session up or to insert/remove one.
//! Exchanges lock the character's own mutex, so one character's exchanges run
//! strictly in order while different characters fight in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock, broadcast};

use crate::error::{Result, RuntimeError};
use crate::session::{CharacterId, ExchangeReport, FightSession, Verdict};

/// Published for every session lifecycle step. Delivery is best-effort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Started {
        character: CharacterId,
        opponent: String,
        seed: u64,
    },
    Exchanged {
        character: CharacterId,
        report: ExchangeReport,
    },
    Closed {
        character: CharacterId,
        verdict: Verdict,
    },
}

pub struct SessionRegistry {
    sessions: RwLock<HashMap<CharacterId, Arc<Mutex<FightSession>>>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// `capacity` bounds how many events a slow subscriber may lag behind.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            events: broadcast::channel(capacity).0,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Registers a new fight. A character has at most one at a time.
    pub async fn open(&self, character: CharacterId, session: FightSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&character) {
            return Err(RuntimeError::SessionExists { character });
        }

        let event = SessionEvent::Started {
            character: character.clone(),
            opponent: session.opponent().name().to_string(),
            seed: session.seed(),
        };
        tracing::info!(
            target: "runtime::registry",
            %character,
            opponent = session.opponent().name(),
            seed = session.seed(),
            "fight opened"
        );
        sessions.insert(character, Arc::new(Mutex::new(session)));
        drop(sessions);

        self.publish(event);
        Ok(())
    }

    /// Plays one exchange in `character`'s fight.
    pub async fn exchange(&self, character: &CharacterId, action: Option<&str>) -> Result<ExchangeReport> {
        let session = self.session(character).await?;
        let report = session.lock().await.exchange(action).inspect_err(|error| {
            tracing::debug!(
                target: "runtime::registry",
                %character,
                %error,
                severity = error.severity().as_str(),
                "exchange rejected"
            );
        })?;

        self.publish(SessionEvent::Exchanged {
            character: character.clone(),
            report: report.clone(),
        });
        Ok(report)
    }

    /// Removes `character`'s fight, finished or not, and hands it back.
    pub async fn close(&self, character: &CharacterId) -> Result<FightSession> {
        let session = self
            .sessions
            .write()
            .await
            .remove(character)
            .ok_or_else(|| RuntimeError::SessionNotFound {
                character: character.clone(),
            })?;

        // Waits for an in-flight exchange to finish before handing it out.
        let session = session.lock().await.clone();
        tracing::info!(
            target: "runtime::registry",
            %character,
            verdict = %session.verdict(),
            exchanges = session.exchanges(),
            "fight closed"
        );
        self.publish(SessionEvent::Closed {
            character: character.clone(),
            verdict: session.verdict(),
        });
        Ok(session)
    }

    /// Current verdict of `character`'s fight.
    pub async fn verdict(&self, character: &CharacterId) -> Result<Verdict> {
        Ok(self.session(character).await?.lock().await.verdict())
    }

    pub async fn contains(&self, character: &CharacterId) -> bool {
        self.sessions.read().await.contains_key(character)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn session(&self, character: &CharacterId) -> Result<Arc<Mutex<FightSession>>> {
        self.sessions
            .read()
            .await
            .get(character)
            .cloned()
            .ok_or_else(|| RuntimeError::SessionNotFound {
                character: character.clone(),
            })
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
