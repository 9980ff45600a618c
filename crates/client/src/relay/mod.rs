//! Session relay client
//!
//! Connects one client to the relay service, subscribes to its session's
//! chat and typing topics, publishes local events and applies inbound ones.
//!
//! # Architecture
//!
//! - **Client**: connection state machine and publishing
//! - **Link**: channel pair between the session and a transport
//! - **Session**: single-task event loop over UI input, relay frames and the typing timer
//! - **Transport**: websocket connection to the relay

pub mod client;
pub mod link;
pub mod session;
pub mod transport;

pub use client::{ConnectionState, RelayClient};
pub use link::{RelayEndpoint, RelayLink};
pub use session::{ChatSession, Cue, IncomingActivity, SessionCommand, SessionEvent, SessionHandle};
