//! Relay connection state machine
//!
//! `Disconnected -> Connecting -> Connected`. Entering `Connected` sends
//! exactly two subscriptions (chat and typing) for the session; they are
//! never re-sent. Publishing while not connected drops the event.

use std::sync::Arc;

use chatbox_shared::{ChatEvent, ClientFrame, Topic, TypingSignal};
use tokio::sync::mpsc;

use crate::identity::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

pub struct RelayClient {
    config: Arc<SessionConfig>,
    state: ConnectionState,
    outbound: Option<mpsc::UnboundedSender<ClientFrame>>,
    subscribed: bool,
}

impl RelayClient {
    pub fn new(config: Arc<SessionConfig>) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
            outbound: None,
            subscribed: false,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A transport connection attempt has started
    pub fn begin_connect(&mut self) {
        if self.state == ConnectionState::Disconnected {
            self.transition(ConnectionState::Connecting);
        }
    }

    /// Attach an established transport and subscribe to the session topics
    ///
    /// Returns false if the client was not connecting or already subscribed.
    pub fn attach(&mut self, outbound: mpsc::UnboundedSender<ClientFrame>) -> bool {
        if self.state != ConnectionState::Connecting || self.subscribed {
            tracing::warn!(
                session_id = %self.config.session_id,
                state = ?self.state,
                "Ignoring transport attach outside of connect"
            );
            return false;
        }

        self.outbound = Some(outbound);
        self.transition(ConnectionState::Connected);

        for topic in Topic::session_pair(&self.config.session_id) {
            tracing::debug!(topic = %topic, "Subscribing to topic");
            self.send(ClientFrame::Subscribe { topic });
        }
        self.subscribed = true;
        true
    }

    /// The transport went away; nothing is retried
    pub fn mark_disconnected(&mut self) {
        self.outbound = None;
        if self.state != ConnectionState::Disconnected {
            self.transition(ConnectionState::Disconnected);
        }
    }

    /// Publish a chat message with a fresh event ID
    ///
    /// The event is returned together with whether it was handed to the
    /// transport; a dropped event will never be echoed.
    pub fn publish_chat(&mut self, display_name: &str, body: &str) -> (ChatEvent, bool) {
        let event = ChatEvent::new(
            self.config.participant_id.clone(),
            self.config.session_id.clone(),
            display_name,
            body,
        );
        let delivered = self.send(ClientFrame::Chat(event.clone()));
        (event, delivered)
    }

    /// Publish a typing signal carrying the in-progress body
    pub fn publish_typing(&mut self, display_name: &str, body: &str) -> TypingSignal {
        let signal = TypingSignal::new(
            self.config.participant_id.clone(),
            self.config.session_id.clone(),
            display_name,
            body,
        );
        self.send(ClientFrame::Typing(signal.clone()));
        signal
    }

    fn send(&mut self, frame: ClientFrame) -> bool {
        let Some(outbound) = self.outbound.as_ref().filter(|_| self.state == ConnectionState::Connected) else {
            tracing::debug!(
                session_id = %self.config.session_id,
                frame = ?frame,
                "Dropping frame while disconnected"
            );
            return false;
        };

        if outbound.send(frame).is_err() {
            tracing::debug!(session_id = %self.config.session_id, "Transport closed, frame dropped");
            self.mark_disconnected();
            return false;
        }
        true
    }

    fn transition(&mut self, next: ConnectionState) {
        tracing::info!(
            session_id = %self.config.session_id,
            from = ?self.state,
            to = ?next,
            "Relay connection state changed"
        );
        self.state = next;
    }
}
