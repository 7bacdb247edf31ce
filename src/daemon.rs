//! Daemon capability surface
//!
//! The embedded LND daemon is an opaque collaborator: it accepts a
//! configuration text blob, exposes lifecycle verbs, and a generic binary
//! command channel. Hosts provide an implementation for their platform
//! (JNI module, FFI binding, out-of-process shim); this crate only depends
//! on the trait.

use async_trait::async_trait;

/// Reply envelope from the daemon's generic command channel.
///
/// `data` carries the base64-armored binary response message.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub data: String,
}

/// Capability surface of the embedded LND daemon.
///
/// Errors are opaque strings from the transport; callers wrap them into
/// [`crate::Error`] at the dispatch boundary.
#[async_trait]
pub trait LndDaemon: Send + Sync {
    /// Start the daemon with the given configuration text.
    async fn start(&self, conf: &str) -> Result<(), String>;

    /// Generate a fresh wallet seed phrase.
    async fn gen_seed(&self) -> Result<Vec<String>, String>;

    /// Create a wallet from a password and the seed split into words.
    async fn create_wallet(&self, password: &str, seed: &[String]) -> Result<String, String>;

    /// Whether a wallet has been initialized for the given network.
    async fn wallet_exists(&self, network: &str) -> Result<bool, String>;

    /// Unlock an existing wallet.
    async fn unlock(&self, password: &str) -> Result<String, String>;

    /// Send an encoded RPC request over the generic command channel.
    async fn send_command(&self, method: &str, payload: &str) -> Result<CommandReply, String>;
}
