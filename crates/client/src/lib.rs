//! Chatbox Client
//!
//! Synchronization core of a two-party chat session: identity resolution,
//! the local message log, debounced typing presence and the session relay
//! client.

pub mod config;
pub mod error;
pub mod identity;
pub mod log;
pub mod presence;
pub mod relay;
pub mod storage;

pub use config::{Config, EchoPolicy, SessionOptions};
pub use error::{ClientError, ClientResult};
pub use identity::{IdentityManager, Role, SessionConfig};
pub use log::MessageLog;
pub use presence::PresenceDebouncer;
pub use relay::{ChatSession, ConnectionState, SessionEvent, SessionHandle};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
