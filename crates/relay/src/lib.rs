//! Chatbox Relay
//!
//! Reference relay service: routes every chat and typing publish to all
//! sockets subscribed to the session topic it is addressed to, including
//! the sender.

pub mod config;
pub mod routes;
pub mod websocket;

pub use config::Config;
pub use routes::router;
pub use websocket::WebSocketState;
