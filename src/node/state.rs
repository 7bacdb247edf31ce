//! Shared lifecycle state for the embedded daemon
//!
//! Two flags track readiness: the daemon process acknowledged a start, and
//! a wallet was created or unlocked. They are mutated only by the
//! [`NodeManager`](super::manager::NodeManager) and guarded by a single
//! mutex so concurrent hosts observe a consistent snapshot.
//!
//! `wallet_ready` implying `daemon_started` is the intended contract but
//! is advisory, not enforced: unlocking a wallet against a daemon that was
//! started by a previous host process leaves `daemon_started` false.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Observable lifecycle phase, derived from the two flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodePhase {
    /// Neither the daemon nor a wallet is available
    Uninitialized,
    /// The daemon acknowledged a start; no wallet yet
    DaemonStarted,
    /// A wallet was created or unlocked; RPC calls are expected to succeed
    WalletReady,
}

/// Snapshot of the lifecycle flags (sent to the host application).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    /// The daemon process has been told to start and acknowledged
    pub daemon_started: bool,

    /// A wallet has been created or unlocked
    pub wallet_ready: bool,
}

impl NodeStatus {
    /// Derive the observable phase from the flags.
    pub fn phase(&self) -> NodePhase {
        if self.wallet_ready {
            NodePhase::WalletReady
        } else if self.daemon_started {
            NodePhase::DaemonStarted
        } else {
            NodePhase::Uninitialized
        }
    }
}

/// Lifecycle state owned by the manager.
#[derive(Debug, Default)]
pub struct NodeState {
    status: Mutex<NodeStatus>,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of the current flags
    pub fn status(&self) -> NodeStatus {
        *self.status.lock().unwrap()
    }

    /// Whether the daemon acknowledged a start
    pub fn daemon_started(&self) -> bool {
        self.status.lock().unwrap().daemon_started
    }

    /// Whether a wallet is ready for RPC traffic
    pub fn wallet_ready(&self) -> bool {
        self.status.lock().unwrap().wallet_ready
    }

    pub(crate) fn set_daemon_started(&self, started: bool) {
        self.status.lock().unwrap().daemon_started = started;
    }

    pub(crate) fn set_wallet_ready(&self, ready: bool) {
        self.status.lock().unwrap().wallet_ready = ready;
    }
}

/// Type alias for shared lifecycle state
pub type SharedNodeState = Arc<NodeState>;

/// Create a new shared lifecycle state with both flags cleared
pub fn create_node_state() -> SharedNodeState {
    Arc::new(NodeState::new())
}
