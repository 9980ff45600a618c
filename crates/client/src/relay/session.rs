//! Chat session event loop
//!
//! One task owns all session state and reacts, one at a time, to local UI
//! commands, inbound relay frames and the typing debounce deadline. Results
//! are reported to the display surface as [`SessionEvent`]s.
//!
//! Commit confirmation is the relay's echo: a sent message enters the log
//! and clears the loading flag when the relay delivers it back to us. With
//! [`EchoPolicy::Optimistic`] it enters the log on publish instead and the
//! echo only clears the flag.
//!
//! A send made while disconnected is dropped: the input is still cleared,
//! but the loading flag is never raised and nothing enters the log.

use std::future;
use std::sync::Arc;
use std::time::Duration;

use chatbox_shared::{ChatEvent, Inbound, ServerFrame, TypingSignal};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use super::client::{ConnectionState, RelayClient};
use super::link::RelayLink;
use super::transport;
use crate::config::{EchoPolicy, SessionOptions};
use crate::identity::SessionConfig;
use crate::log::MessageLog;
use crate::presence::PresenceDebouncer;
use crate::storage::SessionStorage;

/// Local input forwarded to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetName(String),
    Input(String),
    Submit,
    Shutdown,
}

/// Audio cues for the surface to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Sent,
    Received,
    Typing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingActivity {
    pub status_text: String,
    pub preview: String,
}

/// Output for the display surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ConnectionChanged(ConnectionState),
    MessageAppended(ChatEvent),
    /// Scroll to the newest message once layout has settled
    ScrollToEnd { settle: Duration },
    IncomingActivity(Option<IncomingActivity>),
    Loading(bool),
    InputCleared,
    Cue(Cue),
}

/// Cloneable sender of session commands
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub fn set_name(&self, name: impl Into<String>) {
        self.send(SessionCommand::SetName(name.into()));
    }

    pub fn input(&self, text: impl Into<String>) {
        self.send(SessionCommand::Input(text.into()));
    }

    pub fn submit(&self) {
        self.send(SessionCommand::Submit);
    }

    pub fn shutdown(&self) {
        self.send(SessionCommand::Shutdown);
    }

    fn send(&self, command: SessionCommand) {
        if self.commands.send(command).is_err() {
            tracing::debug!("Session already stopped, command dropped");
        }
    }
}

pub struct ChatSession {
    config: Arc<SessionConfig>,
    options: SessionOptions,
    client: RelayClient,
    log: MessageLog,
    presence: PresenceDebouncer,
    display_name: String,
    draft: String,
    loading: bool,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl ChatSession {
    /// Build a session and restore its message log
    pub fn new(
        config: Arc<SessionConfig>,
        storage: Arc<dyn SessionStorage>,
        options: SessionOptions,
    ) -> (Self, SessionHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let session = Self {
            log: MessageLog::restore(storage, &config.session_id),
            client: RelayClient::new(Arc::clone(&config)),
            presence: PresenceDebouncer::new(options.typing_quiet_period),
            config,
            options,
            display_name: String::new(),
            draft: String::new(),
            loading: false,
            commands: command_rx,
            events: event_tx,
        };

        (
            session,
            SessionHandle {
                commands: command_tx,
            },
            event_rx,
        )
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Messages restored from storage, for the initial render
    pub fn history(&self) -> &[ChatEvent] {
        self.log.events()
    }

    /// Connect to the relay and run until shutdown
    ///
    /// A failed connection leaves the session running offline.
    pub async fn connect_and_run(mut self, relay_url: &str) -> MessageLog {
        self.client.begin_connect();
        self.emit(SessionEvent::ConnectionChanged(self.client.state()));

        let link = match transport::connect(relay_url).await {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(error = %e, relay_url = %relay_url, "Relay connection failed");
                self.client.mark_disconnected();
                self.emit(SessionEvent::ConnectionChanged(self.client.state()));
                None
            }
        };

        self.run(link).await
    }

    /// Run the event loop over an established link (or none, offline)
    pub async fn run(mut self, link: Option<RelayLink>) -> MessageLog {
        let mut inbound = match link {
            Some(RelayLink { outbound, inbound }) => {
                self.client.begin_connect();
                if self.client.attach(outbound) {
                    self.emit(SessionEvent::ConnectionChanged(self.client.state()));
                }
                Some(inbound)
            }
            None => None,
        };

        loop {
            let typing_deadline = self.presence.deadline();

            tokio::select! {
                biased;

                // Frames already received are applied before later local input
                frame = recv_inbound(&mut inbound) => match frame {
                    Some(frame) => self.handle_frame(frame),
                    None => {
                        inbound = None;
                        self.client.mark_disconnected();
                        self.emit(SessionEvent::ConnectionChanged(self.client.state()));
                    }
                },

                command = self.commands.recv() => match command {
                    Some(SessionCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },

                _ = sleep_until(typing_deadline) => self.emit_typing_if_due(),
            }
        }

        tracing::info!(session_id = %self.config.session_id, messages = self.log.len(), "Chat session stopped");
        self.log
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::SetName(name) => {
                self.display_name = name;
            }
            SessionCommand::Input(text) => {
                // Message input is disabled until a name is set
                if self.display_name.is_empty() {
                    return;
                }
                self.presence.notify_local_activity(&text);
                self.draft = text;
            }
            SessionCommand::Submit => self.submit(),
            SessionCommand::Shutdown => {}
        }
    }

    fn submit(&mut self) {
        if self.display_name.trim().is_empty() || self.draft.is_empty() {
            tracing::debug!("Ignoring submit without name or message");
            return;
        }

        let body = std::mem::take(&mut self.draft);
        let (event, delivered) = self.client.publish_chat(&self.display_name, &body);
        // A typing signal scheduled for the sent text is stale now
        self.presence.cancel();

        if delivered {
            self.set_loading(true);
        }
        self.emit(SessionEvent::InputCleared);
        self.emit(SessionEvent::Cue(Cue::Sent));

        if delivered && self.options.echo_policy == EchoPolicy::Optimistic {
            self.render(event);
        }
    }

    fn handle_frame(&mut self, frame: ServerFrame) {
        match frame.decode() {
            Ok(Inbound::Chat(event)) => self.on_chat_received(event),
            Ok(Inbound::Typing(signal)) => self.on_typing_received(signal),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed relay frame");
            }
        }
    }

    /// Apply an inbound chat event in arrival order
    pub fn on_chat_received(&mut self, event: ChatEvent) {
        if self.config.is_self(&event.sender) {
            self.set_loading(false);

            if self.log.contains(&event.event_id) {
                tracing::debug!(event_id = %event.event_id, "Own event already applied");
                return;
            }
        }

        self.render(event);
        self.emit(SessionEvent::Cue(Cue::Received));
    }

    /// Apply an inbound typing signal; self-echoes are suppressed
    pub fn on_typing_received(&mut self, signal: TypingSignal) {
        let Some(update) = self
            .presence
            .on_remote_signal(&signal, &self.config.participant_id)
        else {
            return;
        };

        self.emit(SessionEvent::IncomingActivity(Some(IncomingActivity {
            status_text: update.status_text,
            preview: update.preview,
        })));

        if update.play_cue {
            self.emit(SessionEvent::Cue(Cue::Typing));
        }
    }

    fn render(&mut self, event: ChatEvent) {
        let sender = event.sender.clone();
        self.log.append(event.clone());
        self.emit(SessionEvent::MessageAppended(event));

        if self.presence.on_chat_rendered(&sender) {
            self.emit(SessionEvent::IncomingActivity(None));
        }

        self.emit(SessionEvent::ScrollToEnd {
            settle: self.options.scroll_settle,
        });
    }

    fn emit_typing_if_due(&mut self) {
        let Some(text) = self.presence.take_due(Instant::now()) else {
            return;
        };
        if self.display_name.is_empty() {
            return;
        }
        self.client.publish_typing(&self.display_name, &text);
    }

    fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.emit(SessionEvent::Loading(loading));
        }
    }

    fn emit(&self, event: SessionEvent) {
        // The surface may have gone away; the session keeps its state regardless
        let _ = self.events.send(event);
    }
}

async fn recv_inbound(inbound: &mut Option<mpsc::UnboundedReceiver<ServerFrame>>) -> Option<ServerFrame> {
    match inbound {
        Some(rx) => rx.recv().await,
        None => future::pending().await,
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{IdentityManager, Role};
    use crate::relay::link::RelayEndpoint;
    use crate::storage::MemoryStorage;
    use chatbox_shared::{ClientFrame, ParticipantId, SessionId, Topic, TopicKind};
    use tokio::task::JoinHandle;

    struct Harness {
        handle: SessionHandle,
        events: mpsc::UnboundedReceiver<SessionEvent>,
        endpoint: RelayEndpoint,
        task: JoinHandle<MessageLog>,
        config: Arc<SessionConfig>,
    }

    fn guest(participant: &str, session: &str) -> Arc<SessionConfig> {
        Arc::new(SessionConfig {
            participant_id: ParticipantId::from(participant),
            session_id: SessionId::from(session),
            role: Role::Guest,
        })
    }

    fn start(config: Arc<SessionConfig>, storage: Arc<dyn SessionStorage>, options: SessionOptions) -> Harness {
        let (session, handle, events) = ChatSession::new(Arc::clone(&config), storage, options);
        let (link, endpoint) = RelayLink::pair();
        let task = tokio::spawn(session.run(Some(link)));
        Harness {
            handle,
            events,
            endpoint,
            task,
            config,
        }
    }

    impl Harness {
        /// Wait for the next non-subscription frame published by the session
        async fn next_publish(&mut self) -> ClientFrame {
            loop {
                let frame = self.endpoint.frames.recv().await.unwrap();
                if !matches!(frame, ClientFrame::Subscribe { .. }) {
                    return frame;
                }
            }
        }

        /// Deliver a frame as the relay would
        fn deliver(&self, frame: ServerFrame) {
            self.endpoint.deliver.send(frame).unwrap();
        }

        /// Echo every pending chat publish back to the session
        async fn echo_next_chat(&mut self) -> ChatEvent {
            match self.next_publish().await {
                ClientFrame::Chat(event) => {
                    self.deliver(ServerFrame::chat(&event).unwrap());
                    event
                }
                other => panic!("expected chat publish, got {other:?}"),
            }
        }

        async fn finish(self) -> (MessageLog, Vec<SessionEvent>) {
            let Harness {
                handle,
                mut events,
                task,
                ..
            } = self;
            handle.shutdown();
            let log = task.await.unwrap();

            let mut seen = Vec::new();
            while let Ok(event) = events.try_recv() {
                seen.push(event);
            }
            (log, seen)
        }
    }

    #[tokio::test]
    async fn test_subscribes_to_both_session_topics() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );

        let mut topics = Vec::new();
        for _ in 0..2 {
            match harness.endpoint.frames.recv().await.unwrap() {
                ClientFrame::Subscribe { topic } => topics.push(topic),
                other => panic!("unexpected frame {other:?}"),
            }
        }
        assert_eq!(
            topics,
            vec![
                Topic::chat(SessionId::from("host")),
                Topic::typing(SessionId::from("host")),
            ]
        );

        harness.finish().await;
    }

    #[tokio::test]
    async fn test_own_message_enters_log_on_echo() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );

        harness.handle.set_name("Alice");
        harness.handle.input("hello");
        harness.handle.submit();

        let sent = harness.echo_next_chat().await;
        assert_eq!(sent.display_name, "Alice");
        assert_eq!(sent.body, "hello");
        assert_eq!(sent.sender, harness.config.participant_id);

        // Duplicate echo of the same send is applied once
        harness.deliver(ServerFrame::chat(&sent).unwrap());

        let (log, events) = harness.finish().await;
        assert_eq!(log.events(), &[sent.clone()]);

        let loading: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Loading(flag) => Some(*flag),
                _ => None,
            })
            .collect();
        assert_eq!(loading, vec![true, false]);

        // Sent cue fires before the echo is applied
        let sent_cue = events.iter().position(|e| *e == SessionEvent::Cue(Cue::Sent));
        let appended = events
            .iter()
            .position(|e| matches!(e, SessionEvent::MessageAppended(_)));
        assert!(sent_cue.unwrap() < appended.unwrap());
        assert!(events.contains(&SessionEvent::InputCleared));
        assert!(events.contains(&SessionEvent::ScrollToEnd {
            settle: Duration::from_millis(200)
        }));
    }

    #[tokio::test]
    async fn test_optimistic_policy_appends_once() {
        let options = SessionOptions {
            echo_policy: EchoPolicy::Optimistic,
            ..SessionOptions::default()
        };
        let mut harness = start(guest("me", "host"), Arc::new(MemoryStorage::new()), options);

        harness.handle.set_name("Alice");
        harness.handle.input("hi");
        harness.handle.submit();
        let sent = harness.echo_next_chat().await;

        let (log, events) = harness.finish().await;
        assert_eq!(log.events(), &[sent]);
        assert_eq!(events.last(), Some(&SessionEvent::Loading(false)));
    }

    #[tokio::test]
    async fn test_submit_requires_name_and_body() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );

        // No name: input is ignored, submit is a no-op
        harness.handle.input("text");
        harness.handle.submit();

        // Name but empty body
        harness.handle.set_name("Alice");
        harness.handle.submit();

        harness.handle.input("real");
        harness.handle.submit();

        match harness.next_publish().await {
            ClientFrame::Chat(event) => assert_eq!(event.body, "real"),
            other => panic!("unexpected frame {other:?}"),
        }
        harness.finish().await;
    }

    #[tokio::test]
    async fn test_inbound_messages_apply_in_arrival_order() {
        let harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );
        let session = SessionId::from("host");

        let later_sent = ChatEvent::new(ParticipantId::from("bob"), session.clone(), "Bob", "2");
        let earlier_sent = ChatEvent::new(ParticipantId::from("carol"), session, "Carol", "1");
        harness.deliver(ServerFrame::chat(&later_sent).unwrap());
        harness.deliver(ServerFrame::chat(&earlier_sent).unwrap());

        let (log, events) = harness.finish().await;

        let bodies: Vec<_> = log.iter().map(|e| e.body.as_str()).collect();
        assert_eq!(bodies, vec!["2", "1"]);
        let received = events
            .iter()
            .filter(|e| **e == SessionEvent::Cue(Cue::Received))
            .count();
        assert_eq!(received, 2);
    }

    #[tokio::test]
    async fn test_malformed_frame_is_dropped() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );

        harness.deliver(ServerFrame {
            topic: Topic::chat(SessionId::from("host")),
            payload: serde_json::json!({ "body": "no sender" }),
        });

        // The session is still alive and publishing
        harness.handle.set_name("Alice");
        harness.handle.input("still here");
        harness.handle.submit();
        assert!(matches!(harness.next_publish().await, ClientFrame::Chat(_)));

        let (log, _) = harness.finish().await;
        assert!(log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_is_debounced_to_last_text() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );

        harness.handle.set_name("Alice");
        for text in ["h", "he", "hel", "hell"] {
            harness.handle.input(text);
            time::sleep(Duration::from_millis(200)).await;
        }
        harness.handle.input("hello");

        match harness.next_publish().await {
            ClientFrame::Typing(signal) => {
                assert_eq!(signal.body, "hello");
                assert_eq!(signal.status_text, "Alice is typing a message...");
                assert_eq!(signal.sender.as_str(), "me");
            }
            other => panic!("unexpected frame {other:?}"),
        }

        // Nothing else is scheduled
        time::sleep(Duration::from_secs(5)).await;
        assert!(harness.endpoint.frames.try_recv().is_err());

        harness.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_cancels_pending_typing() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );

        harness.handle.set_name("Alice");
        harness.handle.input("hello");
        harness.handle.submit();

        assert!(matches!(harness.next_publish().await, ClientFrame::Chat(_)));
        time::sleep(Duration::from_secs(5)).await;
        assert!(harness.endpoint.frames.try_recv().is_err());

        harness.finish().await;
    }

    #[tokio::test]
    async fn test_typing_indicator_and_self_echo() {
        let mut harness = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );
        let session = SessionId::from("host");

        // Own typing echoed back must not surface
        let own = TypingSignal::new(ParticipantId::from("me"), session.clone(), "Me", "x");
        harness.deliver(ServerFrame::typing(&own).unwrap());

        let bob = TypingSignal::new(ParticipantId::from("bob"), session.clone(), "Bob", "hey th");
        harness.deliver(ServerFrame::typing(&bob).unwrap());
        harness.deliver(ServerFrame::typing(&bob).unwrap());

        let message = ChatEvent::new(ParticipantId::from("bob"), session, "Bob", "hey there");
        harness.deliver(ServerFrame::chat(&message).unwrap());

        // Wait until the chat message has been applied
        loop {
            match harness.events.recv().await.unwrap() {
                SessionEvent::MessageAppended(_) => break,
                _ => continue,
            }
        }

        let (_, rest) = harness.finish().await;
        assert!(rest.contains(&SessionEvent::IncomingActivity(None)));
    }

    #[tokio::test]
    async fn test_typing_events_surface_in_order() {
        let config = guest("me", "host");
        let (mut session, _handle, mut events) = ChatSession::new(
            Arc::clone(&config),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );
        let host = SessionId::from("host");

        session.on_typing_received(TypingSignal::new(ParticipantId::from("me"), host.clone(), "Me", ""));
        session.on_typing_received(TypingSignal::new(ParticipantId::from("bob"), host.clone(), "Bob", "d"));
        session.on_typing_received(TypingSignal::new(ParticipantId::from("bob"), host.clone(), "Bob", "dr"));
        session.on_chat_received(ChatEvent::new(ParticipantId::from("bob"), host, "Bob", "draft"));

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }

        let activity = |preview: &str| {
            SessionEvent::IncomingActivity(Some(IncomingActivity {
                status_text: "Bob is typing a message...".to_string(),
                preview: preview.to_string(),
            }))
        };
        assert_eq!(seen[0], activity("d"));
        assert_eq!(seen[1], SessionEvent::Cue(Cue::Typing));
        assert_eq!(seen[2], activity("dr"));
        assert!(matches!(seen[3], SessionEvent::MessageAppended(_)));
        assert_eq!(seen[4], SessionEvent::IncomingActivity(None));
    }

    #[tokio::test]
    async fn test_end_to_end_between_two_participants() {
        let storage_x = Arc::new(MemoryStorage::new());
        let storage_y = Arc::new(MemoryStorage::new());

        let host = IdentityManager::new(storage_x.clone()).session_config(None);
        let invitation = host.session_id.to_string();
        let guest_config = IdentityManager::new(storage_y.clone()).session_config(Some(&invitation));
        assert_eq!(guest_config.session_id, host.session_id);

        let mut x = start(Arc::new(host), storage_x, SessionOptions::default());
        let mut y = start(Arc::new(guest_config), storage_y.clone(), SessionOptions::default());

        x.handle.set_name("Alice");
        x.handle.input("hello");
        x.handle.submit();

        // Relay fan-out: the publish reaches both subscribers
        let sent = match x.next_publish().await {
            ClientFrame::Chat(event) => event,
            other => panic!("unexpected frame {other:?}"),
        };
        assert_eq!(sent.topic().kind, TopicKind::Chat);
        let frame = ServerFrame::chat(&sent).unwrap();
        x.deliver(frame.clone());
        y.deliver(frame);

        loop {
            if let SessionEvent::MessageAppended(_) = y.events.recv().await.unwrap() {
                break;
            }
        }

        let (log_y, _) = y.finish().await;
        let entries: Vec<_> = log_y
            .iter()
            .map(|e| (e.display_name.as_str(), e.body.as_str()))
            .collect();
        assert_eq!(entries, vec![("Alice", "hello")]);

        // Persisted for Y's next start
        let restored = MessageLog::restore(storage_y, &sent.session_id);
        assert_eq!(restored.len(), 1);

        x.finish().await;
    }

    #[tokio::test]
    async fn test_lost_link_disconnects_and_drops_later_sends() {
        let Harness {
            handle,
            mut events,
            endpoint,
            task,
            ..
        } = start(
            guest("me", "host"),
            Arc::new(MemoryStorage::new()),
            SessionOptions::default(),
        );
        let RelayEndpoint { mut frames, deliver } = endpoint;

        // The relay side goes away
        drop(deliver);
        loop {
            if events.recv().await.unwrap()
                == SessionEvent::ConnectionChanged(ConnectionState::Disconnected)
            {
                break;
            }
        }

        handle.set_name("Alice");
        handle.input("anyone there?");
        handle.submit();
        handle.shutdown();
        let log = task.await.unwrap();
        assert!(log.is_empty());

        // The loop kept serving commands after the disconnect
        let mut rest = Vec::new();
        while let Ok(event) = events.try_recv() {
            rest.push(event);
        }
        assert_eq!(rest, vec![SessionEvent::InputCleared, SessionEvent::Cue(Cue::Sent)]);

        // Only the initial subscriptions ever reached the transport
        let mut subscribes = 0;
        while let Ok(frame) = frames.try_recv() {
            match frame {
                ClientFrame::Subscribe { .. } => subscribes += 1,
                other => panic!("unexpected frame {other:?}"),
            }
        }
        assert_eq!(subscribes, 2);
    }

    #[tokio::test]
    async fn test_offline_submit_does_not_leave_loading_set() {
        let options = SessionOptions {
            echo_policy: EchoPolicy::Optimistic,
            ..SessionOptions::default()
        };
        let (session, handle, mut events) =
            ChatSession::new(guest("me", "host"), Arc::new(MemoryStorage::new()), options);
        let task = tokio::spawn(session.run(None));

        handle.set_name("Alice");
        handle.input("hello");
        handle.submit();
        handle.shutdown();
        let log = task.await.unwrap();
        assert!(log.is_empty());

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(seen, vec![SessionEvent::InputCleared, SessionEvent::Cue(Cue::Sent)]);
    }
}
