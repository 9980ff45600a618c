//! Relay state management
//!
//! Maintains state for all relay connections and topic rooms.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::connection::Connection;
use super::room::RoomManager;

/// Relay state shared across all connections
#[derive(Clone)]
pub struct WebSocketState {
    /// All active connections indexed by connection_id
    pub connections: Arc<RwLock<HashMap<Uuid, Arc<Connection>>>>,

    /// Room manager for topic subscriptions
    pub rooms: Arc<RoomManager>,
}

impl WebSocketState {
    /// Create new relay state
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
            rooms: Arc::new(RoomManager::new()),
        }
    }

    /// Add a connection
    pub async fn add_connection(&self, conn: Connection) -> Arc<Connection> {
        let conn = Arc::new(conn);
        let mut connections = self.connections.write().await;
        connections.insert(conn.connection_id, Arc::clone(&conn));

        tracing::info!(
            connection_id = %conn.connection_id,
            total_connections = connections.len(),
            "Relay connection added"
        );

        conn
    }

    /// Remove a connection and its subscriptions
    pub async fn remove_connection(&self, connection_id: &Uuid) {
        let mut connections = self.connections.write().await;
        if let Some(conn) = connections.remove(connection_id) {
            self.rooms.remove_connection(&conn).await;

            tracing::info!(
                connection_id = %connection_id,
                remaining_connections = connections.len(),
                "Relay connection removed"
            );
        }
    }

    /// Get total number of active connections
    pub async fn connection_count(&self) -> usize {
        let connections = self.connections.read().await;
        connections.len()
    }

    /// Get statistics about the relay state
    pub async fn get_stats(&self) -> RelayStats {
        RelayStats {
            active_connections: self.connection_count().await,
            active_rooms: self.rooms.get_room_count().await,
        }
    }
}

impl Default for WebSocketState {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about relay connections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayStats {
    /// Number of active connections
    pub active_connections: usize,
    /// Number of topics with at least one subscriber
    pub active_rooms: usize,
}
