//! Embedded daemon control
//!
//! This module drives the embedded LND daemon through its lifecycle:
//! configuration, startup, wallet creation, and unlock.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    node module                           │
//! ├─────────────────────────────────────────────────────────┤
//! │  config.rs   - Network, conf template + merge, settings  │
//! │  state.rs    - Shared lifecycle flags                    │
//! │  manager.rs  - Lifecycle (start/init/unlock wallet)      │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod manager;
pub mod state;

// Re-export key types for convenience
pub use config::{LndSettings, Network, DEFAULT_LND_CONF};
pub use manager::{NodeManager, WalletInit};
pub use state::{create_node_state, NodePhase, NodeState, NodeStatus, SharedNodeState};
