//! Chatbox Shared Protocol
//!
//! This crate contains the identifiers, events and topic addressing shared
//! between the chat client and the relay service.

pub mod error;
pub mod events;
pub mod ids;
pub mod topic;

pub use error::*;
pub use events::*;
pub use ids::*;
pub use topic::{Topic, TopicKind};
