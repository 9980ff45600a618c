//! WebSocket relay
//!
//! # Architecture
//!
//! - **Connection**: one client socket and the topics it subscribed to
//! - **Room**: topic-based pub/sub for broadcasting deliveries
//! - **State**: relay state shared across all connections
//! - **Handler**: Axum WebSocket route handler

pub mod connection;
pub mod handler;
pub mod room;
pub mod state;

pub use handler::ws_handler;
pub use state::WebSocketState;
