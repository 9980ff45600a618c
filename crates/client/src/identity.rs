//! Participant and session identity
//!
//! A participant ID is minted once per storage scope and reused after reload.
//! The session ID is either inherited from an invitation (joining a host) or
//! equal to the participant ID (becoming the host). Both are fixed for the
//! lifetime of the client and handed to every component through an immutable
//! [`SessionConfig`].

use std::sync::{Arc, OnceLock};

use chatbox_shared::{ParticipantId, SessionId};
use url::Url;

use crate::storage::{SessionStorage, PARTICIPANT_KEY};

/// Query-string parameter carrying the host's session ID
pub const INVITATION_PARAM: &str = "hostId";

/// Whether this participant created the session or joined it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Guest,
}

/// Immutable per-client session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub participant_id: ParticipantId,
    pub session_id: SessionId,
    pub role: Role,
}

impl SessionConfig {
    /// Shareable invitation link, e.g. `https://chat.example/?hostId=<id>`
    pub fn share_link(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base_url)?;
        url.query_pairs_mut()
            .clear()
            .append_pair(INVITATION_PARAM, self.session_id.as_str());
        Ok(url)
    }

    pub fn is_self(&self, participant: &ParticipantId) -> bool {
        self.participant_id == *participant
    }
}

/// Resolves and memoises the participant and session identity
pub struct IdentityManager {
    storage: Arc<dyn SessionStorage>,
    participant: OnceLock<ParticipantId>,
    session: OnceLock<SessionId>,
}

impl IdentityManager {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            participant: OnceLock::new(),
            session: OnceLock::new(),
        }
    }

    /// Return the stored participant ID, minting and storing one if absent
    ///
    /// Storage failures degrade to an in-memory ID that will not survive a
    /// reload.
    pub fn resolve_participant_id(&self) -> ParticipantId {
        self.participant
            .get_or_init(|| self.load_or_mint_participant())
            .clone()
    }

    /// Resolve the session this client belongs to
    ///
    /// A non-empty invitation joins that host; otherwise this participant
    /// hosts. The first resolution is final.
    pub fn resolve_session_id(&self, invitation: Option<&str>) -> SessionId {
        let invitation = invitation.map(str::trim).filter(|host| !host.is_empty());

        let session = self.session.get_or_init(|| match invitation {
            Some(host) => SessionId::from(host),
            None => SessionId::from(self.resolve_participant_id()),
        });

        if let Some(host) = invitation {
            if host != session.as_str() {
                tracing::warn!(
                    session_id = %session,
                    ignored_invitation = %host,
                    "Session already fixed, ignoring later invitation"
                );
            }
        }

        session.clone()
    }

    /// Resolve both identities into the configuration shared by all components
    pub fn session_config(&self, invitation: Option<&str>) -> SessionConfig {
        let participant_id = self.resolve_participant_id();
        let session_id = self.resolve_session_id(invitation);
        let role = if session_id.as_str() == participant_id.as_str() {
            Role::Host
        } else {
            Role::Guest
        };

        tracing::info!(
            participant_id = %participant_id,
            session_id = %session_id,
            role = ?role,
            "Session identity resolved"
        );

        SessionConfig {
            participant_id,
            session_id,
            role,
        }
    }

    fn load_or_mint_participant(&self) -> ParticipantId {
        match self.storage.get(PARTICIPANT_KEY) {
            Ok(Some(stored)) if !stored.trim().is_empty() => {
                return ParticipantId::from(stored.trim());
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Identity storage unavailable, using in-memory participant ID");
                return ParticipantId::generate();
            }
        }

        let minted = ParticipantId::generate();
        if let Err(e) = self.storage.set(PARTICIPANT_KEY, minted.as_str()) {
            tracing::warn!(error = %e, "Failed to persist participant ID");
        }
        tracing::debug!(participant_id = %minted, "Minted participant ID");
        minted
    }
}

/// Extract the invitation (host session ID) from a URL query string
pub fn invitation_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == INVITATION_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
