//! Ember LND: control and dispatch layer for an embedded Lightning daemon
//!
//! Sits between a host application and an embedded LND daemon running as a
//! separate process or platform module. Drives the daemon through its
//! startup and wallet lifecycle, and translates high-level wallet, channel,
//! and payment operations into the daemon's binary RPC protocol.
//!
//! The daemon, the credential store, and the push-event substrate are
//! opaque collaborators behind the [`daemon::LndDaemon`],
//! [`keychain::Keychain`], and [`events::EventSink`] traits; hosts plug in
//! their platform bindings and get back the [`wallet::LndWallet`] facade.
//!
//! ```no_run
//! use ember_lnd::keychain::MemoryKeychain;
//! use ember_lnd::node::NodeManager;
//! use ember_lnd::test_utils::MockLnd;
//! use ember_lnd::wallet::LndWallet;
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ember_lnd::Error> {
//! let manager = NodeManager::new(Arc::new(MockLnd::new()), Arc::new(MemoryKeychain::new()));
//! let wallet = LndWallet::new(manager);
//!
//! wallet.start(&BTreeMap::new()).await?;
//! let init = wallet.init_wallet(None, None).await?;
//! println!("seed: {}", init.seed);
//! # Ok(())
//! # }
//! ```

pub mod daemon;
pub mod error;
pub mod events;
pub mod keychain;
pub mod logging;
pub mod node;
pub mod rpc;
pub mod test_utils;
pub mod wallet;

pub use error::Error;
pub use node::{LndSettings, Network, NodeManager, NodePhase, NodeStatus, WalletInit};
pub use wallet::{ChannelBalance, LndWallet, WalletBalance};
