//! Session-scoped topic addressing
//!
//! Every relay topic belongs to exactly one session and carries one kind of
//! event. [`Topic::to_wire`] and [`Topic::parse`] are the only places where
//! the transport-level topic string format is known.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::ids::SessionId;

/// Separator between the kind prefix and the session ID
const WIRE_SEPARATOR: char = ' ';

/// Kind of event carried on a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicKind {
    Chat,
    Typing,
}

impl TopicKind {
    pub const ALL: [TopicKind; 2] = [TopicKind::Chat, TopicKind::Typing];

    pub fn prefix(self) -> &'static str {
        match self {
            TopicKind::Chat => "chat",
            TopicKind::Typing => "typing",
        }
    }
}

impl FromStr for TopicKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(TopicKind::Chat),
            "typing" => Ok(TopicKind::Typing),
            other => Err(ProtocolError::UnknownTopicKind(other.to_string())),
        }
    }
}

/// A session-scoped topic descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic {
    pub kind: TopicKind,
    pub session_id: SessionId,
}

impl Topic {
    pub fn new(kind: TopicKind, session_id: SessionId) -> Self {
        Self { kind, session_id }
    }

    pub fn chat(session_id: SessionId) -> Self {
        Self::new(TopicKind::Chat, session_id)
    }

    pub fn typing(session_id: SessionId) -> Self {
        Self::new(TopicKind::Typing, session_id)
    }

    /// Both topics of a session, chat first
    pub fn session_pair(session_id: &SessionId) -> [Topic; 2] {
        TopicKind::ALL.map(|kind| Topic::new(kind, session_id.clone()))
    }

    /// Transport-level topic name, e.g. `"chat 1b4e..."`
    pub fn to_wire(&self) -> String {
        format!(
            "{}{}{}",
            self.kind.prefix(),
            WIRE_SEPARATOR,
            self.session_id.as_str()
        )
    }

    /// Inverse of [`Topic::to_wire`]
    pub fn parse(wire: &str) -> Result<Self, ProtocolError> {
        let (prefix, session) = wire
            .split_once(WIRE_SEPARATOR)
            .ok_or_else(|| ProtocolError::MalformedTopic(wire.to_string()))?;

        if session.is_empty() {
            return Err(ProtocolError::MalformedTopic(wire.to_string()));
        }

        Ok(Self {
            kind: prefix.parse()?,
            session_id: SessionId::from(session),
        })
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl TryFrom<String> for Topic {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::parse(&value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.to_wire()
    }
}
