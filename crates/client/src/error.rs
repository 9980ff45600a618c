//! Client error types
//!
//! Nothing here reaches the end user: storage, transport and protocol
//! failures during a session are logged and absorbed by the session loop.
//! Configuration and storage setup errors surface from their own modules.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
