//! Local message log
//!
//! Ordered, append-only record of the chat events this client has applied.
//! The full sequence is written back to storage after every append and
//! restored verbatim at startup.

use std::collections::HashSet;
use std::sync::Arc;

use chatbox_shared::{ChatEvent, EventId, SessionId};

use crate::storage::{SessionStorage, MESSAGES_KEY};

pub struct MessageLog {
    storage: Arc<dyn SessionStorage>,
    key: String,
    events: Vec<ChatEvent>,
    ids: HashSet<EventId>,
}

impl MessageLog {
    /// Storage key of a session's log
    pub fn storage_key(session_id: &SessionId) -> String {
        format!("{MESSAGES_KEY}:{session_id}")
    }

    /// Load the persisted log of a session
    ///
    /// Missing, unreadable or corrupt data yields an empty log.
    pub fn restore(storage: Arc<dyn SessionStorage>, session_id: &SessionId) -> Self {
        let key = Self::storage_key(session_id);
        let events = load_events(storage.as_ref(), &key);
        let ids = events.iter().map(|e| e.event_id.clone()).collect();

        tracing::debug!(
            session_id = %session_id,
            restored = events.len(),
            "Message log restored"
        );

        Self {
            storage,
            key,
            events,
            ids,
        }
    }

    /// Append an event and persist the whole sequence
    ///
    /// A failed write is logged; the in-memory log still holds the event.
    pub fn append(&mut self, event: ChatEvent) {
        self.ids.insert(event.event_id.clone());
        self.events.push(event);

        match serde_json::to_string(&self.events) {
            Ok(blob) => {
                if let Err(e) = self.storage.set(&self.key, &blob) {
                    tracing::warn!(error = %e, key = %self.key, "Failed to persist message log");
                }
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to serialize message log");
            }
        }
    }

    pub fn contains(&self, event_id: &EventId) -> bool {
        self.ids.contains(event_id)
    }

    pub fn events(&self) -> &[ChatEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn load_events(storage: &dyn SessionStorage, key: &str) -> Vec<ChatEvent> {
    let blob = match storage.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, key = %key, "Message log storage unavailable");
            return Vec::new();
        }
    };

    match serde_json::from_str(&blob) {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!(error = %e, key = %key, "Discarding corrupt message log");
            Vec::new()
        }
    }
}
