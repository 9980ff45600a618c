//! Error types for the chatbox wire protocol

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed topic: {0}")]
    MalformedTopic(String),

    #[error("Unknown topic kind: {0}")]
    UnknownTopicKind(String),

    #[error("Malformed payload on {topic}: {source}")]
    MalformedPayload {
        topic: String,
        #[source]
        source: serde_json::Error,
    },
}
