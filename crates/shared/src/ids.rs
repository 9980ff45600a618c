//! Opaque identifiers
//!
//! Participants, sessions and chat events are addressed by opaque strings.
//! Freshly minted values are UUID v4 strings, but any non-empty string
//! received from the wire or from an invitation is accepted as-is.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh, globally unique value
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// One client instance (a tab or process)
    ParticipantId
);

opaque_id!(
    /// A two-party chat room, named after its host participant
    SessionId
);

opaque_id!(
    /// A single chat send
    EventId
);

impl From<ParticipantId> for SessionId {
    /// A host's session is addressed by the host's own participant ID
    fn from(host: ParticipantId) -> Self {
        Self(host.0)
    }
}
