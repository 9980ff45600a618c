//! Topic room management for pub/sub
//!
//! Every session topic (`chat <id>`, `typing <id>`) is a room. A publish is
//! delivered to every connection in the room, the publisher included.

use std::collections::HashMap;
use std::sync::Arc;

use chatbox_shared::{ServerFrame, Topic};
use tokio::sync::RwLock;

use super::connection::Connection;

/// Manages topic "rooms" for broadcasting deliveries
pub struct RoomManager {
    /// Map of topic -> subscribed connections, in join order
    rooms: Arc<RwLock<HashMap<Topic, Vec<Arc<Connection>>>>>,
}

impl RoomManager {
    /// Create a new room manager
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a connection to a topic room
    ///
    /// The topic is recorded in the connection's subscription set, which is
    /// what [`RoomManager::remove_connection`] walks on disconnect. Joining
    /// the same topic twice is a no-op.
    pub async fn join(&self, topic: Topic, conn: Arc<Connection>) {
        if !conn.subscribe(topic.clone()).await {
            return;
        }

        let mut rooms = self.rooms.write().await;
        let members = rooms.entry(topic.clone()).or_default();
        members.push(Arc::clone(&conn));

        tracing::debug!(
            topic = %topic,
            connection_id = %conn.connection_id,
            room_size = members.len(),
            "Connection joined topic room"
        );
    }

    /// Broadcast a delivery to all connections in a topic room
    ///
    /// Silently ignores send errors (closed connections will be cleaned up).
    /// Returns the number of connections the frame was handed to.
    pub async fn broadcast(&self, topic: &Topic, frame: ServerFrame) -> usize {
        let rooms = self.rooms.read().await;
        let Some(conns) = rooms.get(topic) else {
            tracing::debug!(topic = %topic, "No subscribers for topic");
            return 0;
        };

        let mut success_count = 0;
        let mut failed_count = 0;

        for conn in conns {
            match conn.send(frame.clone()) {
                Ok(()) => success_count += 1,
                Err(_) => {
                    failed_count += 1;
                    tracing::warn!(
                        connection_id = %conn.connection_id,
                        "Failed to send frame to connection (likely closed)"
                    );
                }
            }
        }

        tracing::debug!(
            topic = %topic,
            recipients = success_count,
            failed = failed_count,
            "Broadcast to topic room"
        );

        success_count
    }

    /// Remove a connection from every room it subscribed to
    pub async fn remove_connection(&self, conn: &Connection) {
        let topics = conn.get_subscriptions().await;
        let mut rooms = self.rooms.write().await;
        let mut removed_from = 0;

        for topic in &topics {
            let Some(conns) = rooms.get_mut(topic) else {
                continue;
            };

            let before_len = conns.len();
            conns.retain(|c| c.connection_id != conn.connection_id);
            if conns.len() < before_len {
                removed_from += 1;
            }

            // Clean up empty rooms
            if conns.is_empty() {
                rooms.remove(topic);
            }
        }

        if removed_from > 0 {
            tracing::debug!(
                connection_id = %conn.connection_id,
                topic_count = removed_from,
                "Removed connection from rooms"
            );
        }
    }

    /// Get room size (number of connections) for a topic
    pub async fn get_room_size(&self, topic: &Topic) -> usize {
        let rooms = self.rooms.read().await;
        rooms.get(topic).map(|v| v.len()).unwrap_or(0)
    }

    /// Get total number of active rooms
    pub async fn get_room_count(&self) -> usize {
        let rooms = self.rooms.read().await;
        rooms.len()
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::new()
    }
}
