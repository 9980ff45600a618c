//! WebSocket transport to the relay
//!
//! Frames are JSON text messages. A writer task drains the outbound channel
//! and a reader task feeds the inbound channel; when the socket closes the
//! inbound channel ends and the session sees a disconnect.

use chatbox_shared::{ClientFrame, ServerFrame};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use super::link::RelayLink;
use crate::error::ClientResult;

/// Open a websocket to the relay and wire it to a [`RelayLink`]
pub async fn connect(relay_url: &str) -> ClientResult<RelayLink> {
    let (socket, _) = tokio_tungstenite::connect_async(relay_url).await?;
    tracing::info!(relay_url = %relay_url, "Connected to relay");

    let (mut sender, mut receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<ClientFrame>();
    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel::<ServerFrame>();

    // Spawn task to send frames to the relay
    tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            match serde_json::to_string(&frame) {
                Ok(json) => {
                    if sender.send(Message::Text(json)).await.is_err() {
                        break; // Connection closed
                    }
                }
                Err(e) => {
                    tracing::error!(error = ?e, "Failed to serialize relay frame");
                }
            }
        }
        let _ = sender.close().await;
    });

    // Spawn task to receive deliveries from the relay
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => match serde_json::from_str::<ServerFrame>(&text) {
                    Ok(frame) => {
                        if inbound_tx.send(frame).is_err() {
                            break; // Session stopped
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = ?e, message = %text, "Failed to parse relay frame");
                    }
                },
                Ok(Message::Close(_)) => {
                    tracing::info!("Relay closed the connection");
                    break;
                }
                Ok(_) => {} // Ignore binary and control frames
                Err(e) => {
                    tracing::warn!(error = %e, "Relay connection error");
                    break;
                }
            }
        }
    });

    Ok(RelayLink {
        outbound: outbound_tx,
        inbound: inbound_rx,
    })
}
