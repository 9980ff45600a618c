//! WebSocket connection management
//!
//! Represents an active relay connection with subscription tracking.

use std::collections::HashSet;
use std::sync::Arc;

use chatbox_shared::{ServerFrame, Topic};
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

/// Represents an active WebSocket connection
#[derive(Debug)]
pub struct Connection {
    /// Unique ID for this connection
    pub connection_id: Uuid,

    /// Channel to send deliveries to this connection
    pub sender: mpsc::UnboundedSender<ServerFrame>,

    /// Topics this connection is subscribed to; the rooms it must leave on disconnect
    pub subscriptions: Arc<RwLock<HashSet<Topic>>>,
}

impl Connection {
    /// Create a new connection
    pub fn new(sender: mpsc::UnboundedSender<ServerFrame>) -> Self {
        Self {
            connection_id: Uuid::new_v4(),
            sender,
            subscriptions: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Send a delivery to this connection
    ///
    /// Returns Ok(()) if sent successfully, Err if connection is closed
    #[allow(clippy::result_large_err)] // Error type is from tokio mpsc, containing the failed frame
    pub fn send(&self, frame: ServerFrame) -> Result<(), mpsc::error::SendError<ServerFrame>> {
        self.sender.send(frame)
    }

    /// Subscribe to a topic; returns false if already subscribed
    pub async fn subscribe(&self, topic: Topic) -> bool {
        let mut subs = self.subscriptions.write().await;
        let added = subs.insert(topic.clone());
        tracing::debug!(
            connection_id = %self.connection_id,
            topic = %topic,
            added,
            "Subscribed to topic"
        );
        added
    }

    /// Get all topic subscriptions
    pub async fn get_subscriptions(&self) -> HashSet<Topic> {
        let subs = self.subscriptions.read().await;
        subs.clone()
    }
}
