//! Chat event types and serialization
//!
//! Defines the chat and typing payloads together with the frames exchanged
//! between clients and the relay.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::ids::{EventId, ParticipantId, SessionId};
use crate::topic::{Topic, TopicKind};

// =============================================================================
// Payloads
// =============================================================================

/// A chat message sent to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    #[serde(rename = "eventID")]
    pub event_id: EventId,
    #[serde(rename = "senderParticipantID")]
    pub sender: ParticipantId,
    #[serde(rename = "sessionID")]
    pub session_id: SessionId,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub body: String,
}

impl ChatEvent {
    /// Build a chat event with a freshly minted event ID
    pub fn new(
        sender: ParticipantId,
        session_id: SessionId,
        display_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            event_id: EventId::generate(),
            sender,
            session_id,
            display_name: display_name.into(),
            body: body.into(),
        }
    }

    pub fn topic(&self) -> Topic {
        Topic::chat(self.session_id.clone())
    }
}

/// Transient "someone is typing" signal; the latest one wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSignal {
    #[serde(rename = "sessionID")]
    pub session_id: SessionId,
    #[serde(rename = "senderParticipantID")]
    pub sender: ParticipantId,
    #[serde(rename = "statusText")]
    pub status_text: String,
    /// In-progress input, so the other side can preview it
    pub body: String,
}

impl TypingSignal {
    pub fn new(
        sender: ParticipantId,
        session_id: SessionId,
        display_name: &str,
        body: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            sender,
            status_text: Self::status_for(display_name),
            body: body.into(),
        }
    }

    /// Human-readable activity description
    pub fn status_for(display_name: &str) -> String {
        format!("{display_name} is typing a message...")
    }

    pub fn topic(&self) -> Topic {
        Topic::typing(self.session_id.clone())
    }
}

// =============================================================================
// Client-to-Relay Frames
// =============================================================================

/// Frames sent from a client to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Start receiving everything published to a topic
    Subscribe { topic: Topic },

    /// Publish a chat message
    Chat(ChatEvent),

    /// Publish a typing signal
    Typing(TypingSignal),
}

// =============================================================================
// Relay-to-Client Frames
// =============================================================================

/// A publish delivered to a topic subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerFrame {
    pub topic: Topic,
    pub payload: serde_json::Value,
}

/// A decoded inbound delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Chat(ChatEvent),
    Typing(TypingSignal),
}

impl ServerFrame {
    pub fn chat(event: &ChatEvent) -> Result<Self, serde_json::Error> {
        Ok(Self {
            topic: event.topic(),
            payload: serde_json::to_value(event)?,
        })
    }

    pub fn typing(signal: &TypingSignal) -> Result<Self, serde_json::Error> {
        Ok(Self {
            topic: signal.topic(),
            payload: serde_json::to_value(signal)?,
        })
    }

    /// Decode the payload according to the topic kind
    pub fn decode(self) -> Result<Inbound, ProtocolError> {
        let ServerFrame { topic, payload } = self;
        let malformed = |source| ProtocolError::MalformedPayload {
            topic: topic.to_wire(),
            source,
        };

        match topic.kind {
            TopicKind::Chat => serde_json::from_value(payload)
                .map(Inbound::Chat)
                .map_err(malformed),
            TopicKind::Typing => serde_json::from_value(payload)
                .map(Inbound::Typing)
                .map_err(malformed),
        }
    }
}
