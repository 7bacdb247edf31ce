//! Daemon lifecycle management
//!
//! Owns the readiness flags and drives the embedded daemon through its
//! startup and wallet initialization sequence. All state transitions
//! happen here; the operation facade only reads the flags.

use super::config::{LndSettings, Network};
use super::state::{create_node_state, SharedNodeState};
use crate::daemon::LndDaemon;
use crate::error::Error;
use crate::events::{EventSink, NodeEvent, NullSink};
use crate::keychain::{Keychain, PASSWORD_KEY, SEED_KEY};
use rand::RngCore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Delay for the credential store to commit before the wallet is created.
const KEYCHAIN_SETTLE_DELAY: Duration = Duration::from_millis(5000);

/// Outcome of a successful wallet initialization.
///
/// The only place a plaintext seed is returned without the caller having
/// supplied it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletInit {
    /// Daemon's creation result message
    pub message: String,
    /// Seed phrase the wallet was created from
    pub seed: String,
    /// Wallet password
    pub password: String,
}

/// Manages the embedded LND daemon lifecycle
pub struct NodeManager {
    daemon: Arc<dyn LndDaemon>,
    keychain: Arc<dyn Keychain>,
    settings: LndSettings,
    state: SharedNodeState,
    events: Arc<dyn EventSink>,
}

impl NodeManager {
    /// Create a manager with default settings and no event subscriber
    pub fn new(daemon: Arc<dyn LndDaemon>, keychain: Arc<dyn Keychain>) -> Self {
        Self {
            daemon,
            keychain,
            settings: LndSettings::default(),
            state: create_node_state(),
            events: Arc::new(NullSink),
        }
    }

    /// Replace the settings (network, standing conf overrides)
    pub fn with_settings(mut self, settings: LndSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Subscribe the host's event sink to lifecycle transitions
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Shared lifecycle state (read-only outside the manager)
    pub fn state(&self) -> &SharedNodeState {
        &self.state
    }

    /// Current settings
    pub fn settings(&self) -> &LndSettings {
        &self.settings
    }

    pub(crate) fn daemon(&self) -> &dyn LndDaemon {
        self.daemon.as_ref()
    }

    /// Start the embedded daemon with the merged configuration.
    ///
    /// Fails with [`Error::AlreadyStarted`] if a start was already
    /// acknowledged; the daemon is not contacted again in that case.
    pub async fn start(&self, overrides: &BTreeMap<String, String>) -> Result<(), Error> {
        if self.state.daemon_started() {
            return Err(Error::AlreadyStarted);
        }

        let conf = self.settings.build_conf(overrides);
        log::info!(
            "Starting embedded LND daemon ({})",
            self.settings.network.as_str()
        );

        self.daemon.start(&conf).await.map_err(Error::Daemon)?;

        self.state.set_daemon_started(true);
        self.events.emit(NodeEvent::DaemonStarted);
        log::info!("LND daemon started");
        Ok(())
    }

    /// Generate a wallet seed phrase (space-joined words)
    pub async fn gen_seed(&self) -> Result<String, Error> {
        let words = self.daemon.gen_seed().await.map_err(Error::Daemon)?;
        Ok(words.join(" "))
    }

    /// Generate a random 256-bit wallet password, rendered as lowercase hex
    pub async fn gen_password(&self) -> Result<String, Error> {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Ok(hex::encode(bytes))
    }

    /// Store a seed phrase in the credential store
    pub async fn store_seed_to_keychain(&self, seed: &str) -> Result<(), Error> {
        self.keychain
            .set(SEED_KEY, seed)
            .await
            .map_err(Error::Keychain)
    }

    /// Retrieve the stored seed phrase, if any
    pub async fn get_seed_from_keychain(&self) -> Result<Option<String>, Error> {
        self.keychain.get(SEED_KEY).await.map_err(Error::Keychain)
    }

    /// Store the wallet password in the credential store
    pub async fn store_password_to_keychain(&self, password: &str) -> Result<(), Error> {
        self.keychain
            .set(PASSWORD_KEY, password)
            .await
            .map_err(Error::Keychain)
    }

    /// Retrieve the stored wallet password, if any
    pub async fn get_password_from_keychain(&self) -> Result<Option<String>, Error> {
        self.keychain
            .get(PASSWORD_KEY)
            .await
            .map_err(Error::Keychain)
    }

    /// Whether a wallet exists for the given network (defaults to the
    /// configured network). Pure query, no state change.
    pub async fn wallet_exists(&self, network: Option<Network>) -> Result<bool, Error> {
        let network = network.unwrap_or(self.settings.network);
        self.daemon
            .wallet_exists(network.as_str())
            .await
            .map_err(Error::Daemon)
    }

    /// Initialize a wallet, generating any material not supplied.
    ///
    /// Fails with [`Error::WalletExists`] before generating anything or
    /// touching the credential store if a wallet already exists. The two
    /// credential writes run concurrently with a fixed settle delay so the
    /// store commits before wallet creation.
    pub async fn init_wallet(
        &self,
        seed: Option<String>,
        password: Option<String>,
    ) -> Result<WalletInit, Error> {
        if self.wallet_exists(None).await? {
            return Err(Error::WalletExists);
        }

        let seed = match seed {
            Some(seed) => seed,
            None => self.gen_seed().await?,
        };
        let password = match password {
            Some(password) => password,
            None => self.gen_password().await?,
        };

        let (seed_store, password_store, _) = tokio::join!(
            self.store_seed_to_keychain(&seed),
            self.store_password_to_keychain(&password),
            tokio::time::sleep(KEYCHAIN_SETTLE_DELAY),
        );
        seed_store?;
        password_store?;

        let words: Vec<String> = seed.split_whitespace().map(str::to_string).collect();
        let message = self
            .daemon
            .create_wallet(&password, &words)
            .await
            .map_err(Error::Daemon)?;

        self.state.set_wallet_ready(true);
        self.events.emit(NodeEvent::WalletInitialized);
        log::info!("Wallet initialised ({} seed words)", words.len());

        Ok(WalletInit {
            message,
            seed,
            password,
        })
    }

    /// Unlock an existing wallet with the stored password.
    ///
    /// Fails without contacting the daemon when no password is stored or
    /// retrieval fails.
    pub async fn unlock_wallet(&self) -> Result<String, Error> {
        let password = match self.get_password_from_keychain().await {
            Ok(Some(password)) => password,
            Ok(None) => {
                return Err(Error::MissingCredential(
                    "keychain has no password entry".to_string(),
                ))
            }
            Err(e) => return Err(e),
        };

        let result = self.daemon.unlock(&password).await.map_err(Error::Daemon)?;

        self.state.set_wallet_ready(true);
        self.events.emit(NodeEvent::WalletUnlocked);
        log::info!("Wallet unlocked");
        Ok(result)
    }
}
