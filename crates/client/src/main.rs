//! Terminal chat client
//!
//! Usage:
//!   RELAY_URL=ws://localhost:4000/ws chatbox
//!   CHATBOX_HOST_ID=<host id> chatbox
//!
//! The first line typed is the display name (unless CHATBOX_NAME is set);
//! every following line is sent as a message. Ctrl-D leaves the chat.

use std::sync::Arc;

use anyhow::Context;
use chatbox_client::relay::{Cue, SessionEvent};
use chatbox_client::{
    ChatSession, Config, FileStorage, IdentityManager, MemoryStorage, SessionStorage,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let storage: Arc<dyn SessionStorage> = match &config.storage_dir {
        Some(dir) => Arc::new(
            FileStorage::open(dir)
                .with_context(|| format!("Failed to open storage at {}", dir.display()))?,
        ),
        None => Arc::new(MemoryStorage::new()),
    };

    let identity = IdentityManager::new(Arc::clone(&storage));
    let session_config = Arc::new(identity.session_config(config.invitation.as_deref()));

    match session_config.share_link(&config.share_base_url) {
        Ok(link) => println!("Chat link (send it to a friend): {link}"),
        Err(e) => tracing::warn!(error = %e, "Invalid SHARE_BASE_URL"),
    }
    println!("Host ID: {}", session_config.session_id);

    let (session, handle, mut events) =
        ChatSession::new(Arc::clone(&session_config), storage, config.session);

    if session.history().is_empty() {
        println!("No Messages...");
    }
    for event in session.history() {
        println!("{}: {}", event.display_name, event.body);
    }

    // Render session output
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::MessageAppended(message) => {
                    println!("{}: {}", message.display_name, message.body);
                }
                SessionEvent::IncomingActivity(Some(activity)) => {
                    println!("  ({})", activity.status_text);
                }
                SessionEvent::ConnectionChanged(state) => {
                    tracing::info!(state = ?state, "Connection state");
                }
                SessionEvent::Cue(Cue::Typing) | SessionEvent::Cue(Cue::Received) => {
                    print!("\x07");
                }
                _ => {}
            }
        }
    });

    // Read local input
    let input = handle.clone();
    let mut has_name = config.display_name.is_some();
    if let Some(name) = &config.display_name {
        input.set_name(name.clone());
    } else {
        println!("Enter chat name:");
    }
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim_end().to_string();
            if !has_name {
                if line.trim().is_empty() {
                    continue;
                }
                input.set_name(line);
                has_name = true;
                continue;
            }
            input.input(line);
            input.submit();
        }
        input.shutdown();
    });

    session.connect_and_run(&config.relay_url).await;
    Ok(())
}
