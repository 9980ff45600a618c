//! WebSocket handler for Axum
//!
//! Accepts relay connections and routes client frames to topic rooms. There
//! is no authentication: knowing a session ID is enough to join it.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use chatbox_shared::{ClientFrame, ServerFrame};
use futures::{stream::StreamExt, SinkExt};
use tokio::sync::mpsc;

use super::{connection::Connection, state::WebSocketState};

/// WebSocket handler - upgrades HTTP connection to WebSocket
pub async fn ws_handler(ws: WebSocketUpgrade, State(ws_state): State<WebSocketState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, ws_state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, ws_state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending deliveries to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerFrame>();

    let conn = ws_state.add_connection(Connection::new(tx)).await;
    let connection_id = conn.connection_id;

    // Spawn task to send deliveries to client
    let send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
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
    });

    // Handle incoming frames
    while let Some(msg) = receiver.next().await {
        let Ok(msg) = msg else {
            break;
        };

        match msg {
            Message::Text(text) => match serde_json::from_str::<ClientFrame>(&text) {
                Ok(frame) => handle_client_frame(frame, Arc::clone(&conn), &ws_state).await,
                Err(e) => {
                    // Malformed frames are dropped without a reply
                    tracing::warn!(
                        error = ?e,
                        message = %text,
                        "Failed to parse client frame"
                    );
                }
            },
            Message::Close(_) => {
                tracing::info!(connection_id = %connection_id, "WebSocket close frame received");
                break;
            }
            Message::Ping(_) | Message::Pong(_) => {
                // Axum handles ping/pong automatically
            }
            Message::Binary(_) => {}
        }
    }

    // Cleanup on disconnect
    tracing::info!(connection_id = %connection_id, "Relay connection closing");
    ws_state.remove_connection(&connection_id).await;

    send_task.abort();
}

/// Route one client frame
async fn handle_client_frame(frame: ClientFrame, conn: Arc<Connection>, ws_state: &WebSocketState) {
    let delivery = match &frame {
        ClientFrame::Subscribe { topic } => {
            ws_state.rooms.join(topic.clone(), conn).await;
            return;
        }
        ClientFrame::Chat(event) => ServerFrame::chat(event),
        ClientFrame::Typing(signal) => ServerFrame::typing(signal),
    };

    let delivery = match delivery {
        Ok(delivery) => delivery,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to encode delivery");
            return;
        }
    };

    let topic = delivery.topic.clone();
    let recipients = ws_state.rooms.broadcast(&topic, delivery).await;
    tracing::debug!(
        connection_id = %conn.connection_id,
        topic = %topic,
        recipients,
        "Relayed publish"
    );
}
