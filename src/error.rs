//! Error types for the LND control layer
//!
//! Every public operation reports failure through [`Error`]; the capability
//! traits at the process boundary surface opaque string errors which are
//! wrapped into the matching variant here.

use thiserror::Error;

/// Errors produced by lifecycle, dispatch, and wallet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Starting a daemon that is already started.
    #[error("LND is already started")]
    AlreadyStarted,

    /// Initializing a wallet that already exists for the network.
    #[error("wallet already initialised")]
    WalletExists,

    /// A wallet-gated operation was invoked before the wallet became ready.
    #[error("wallet is not ready")]
    NotReady,

    /// Unlock was attempted with no stored wallet password.
    #[error("no wallet password stored: {0}")]
    MissingCredential(String),

    /// Credential store failure.
    #[error("keychain error: {0}")]
    Keychain(String),

    /// Daemon or transport failure.
    #[error("daemon error: {0}")]
    Daemon(String),

    /// A schema name that is not in the wire registry.
    #[error("unknown schema: {0}")]
    UnknownSchema(String),

    /// Request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// Reply payload could not be deserialized.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Operation-specific failure with a descriptive message.
    #[error("{0}")]
    Other(String),
}
