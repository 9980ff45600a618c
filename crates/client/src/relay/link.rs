//! Channel pair between a session and its transport

use chatbox_shared::{ClientFrame, ServerFrame};
use tokio::sync::mpsc;

/// Session side of a relay connection
///
/// The inbound receiver yields `None` once the transport is gone.
#[derive(Debug)]
pub struct RelayLink {
    pub outbound: mpsc::UnboundedSender<ClientFrame>,
    pub inbound: mpsc::UnboundedReceiver<ServerFrame>,
}

/// Transport side of a relay connection
#[derive(Debug)]
pub struct RelayEndpoint {
    pub frames: mpsc::UnboundedReceiver<ClientFrame>,
    pub deliver: mpsc::UnboundedSender<ServerFrame>,
}

impl RelayLink {
    /// Create a connected link/endpoint pair
    pub fn pair() -> (RelayLink, RelayEndpoint) {
        let (outbound, frames) = mpsc::unbounded_channel();
        let (deliver, inbound) = mpsc::unbounded_channel();

        (
            RelayLink { outbound, inbound },
            RelayEndpoint { frames, deliver },
        )
    }
}
