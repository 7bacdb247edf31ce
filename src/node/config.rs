//! Node configuration: network selection, conf template, and persistence
//!
//! The daemon receives its configuration as a single text blob. A fixed
//! multi-section template covers the stock deployment; callers patch it
//! with key/value overrides at start time. Standing overrides (and the
//! network choice) persist to disk as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Network type for the embedded daemon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Main network
    Mainnet,
    /// Test network
    Testnet,
    /// Local regression test network
    #[default]
    Regtest,
}

impl Network {
    /// Get the network name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl FromStr for Network {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Ok(Network::Regtest), // Default to regtest
        }
    }
}

/// Default daemon configuration template.
///
/// Sections: application, routing, chain backend, and autopilot settings.
/// Each key appears at most once per section; overrides rely on that.
pub const DEFAULT_LND_CONF: &str = "\
[Application Options]
debuglevel=info
no-macaroons=1
maxbackoff=2s
nolisten=1
norest=1
sync-freelist=1
accept-keysend=1

[Routing]
routing.assumechanvalid=1

[Bitcoin]
bitcoin.active=1
bitcoin.regtest=1
bitcoin.testnet=0
bitcoin.node=bitcoind

[Bitcoind]
bitcoind.rpchost=192.168.23.192:18443
bitcoind.rpcuser=polaruser
bitcoind.rpcpass=polarpass
bitcoind.zmqpubrawblock=192.168.23.192:28334
bitcoind.zmqpubrawtx=192.168.23.192:29335

[Neutrino]
neutrino.addpeer=faucet.lightning.community
neutrino.feeurl=https://nodes.lightning.computer/fees/v1/btc-fee-estimates.json

[autopilot]
autopilot.active=0
autopilot.private=0
autopilot.minconfs=0
autopilot.conftarget=30
autopilot.allocation=1.0
autopilot.heuristic=externalscore:0.95
autopilot.heuristic=preferential:0.05
";

/// Patch the default template with key/value overrides.
///
/// For each override key: if the key text occurs anywhere in the template,
/// the first `key=<...>` line is rewritten in place (section structure
/// preserved); otherwise `key=value` is appended as a new trailing line.
///
/// The containment check is a plain substring test. A key that is a
/// substring of an unrelated key (e.g. `active` vs `bitcoin.active`)
/// rewrites the unrelated line; callers must pass fully-qualified keys.
pub fn merge_conf(overrides: &BTreeMap<String, String>) -> String {
    let mut conf = DEFAULT_LND_CONF.to_string();
    for (key, value) in overrides {
        apply_override(&mut conf, key, value);
    }
    conf
}

fn apply_override(conf: &mut String, key: &str, value: &str) {
    if conf.contains(key) {
        let needle = format!("{}=", key);
        if let Some(start) = conf.find(&needle) {
            let line_end = conf[start..]
                .find('\n')
                .map(|i| start + i)
                .unwrap_or(conf.len());
            conf.replace_range(start..line_end, &format!("{}={}", key, value));
        }
    } else {
        conf.push_str(&format!("{}={}\n", key, value));
    }
}

/// Persistent settings for the embedded daemon, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LndSettings {
    /// Network the wallet operates on
    #[serde(default)]
    pub network: Network,

    /// Standing conf overrides applied on every start
    #[serde(default)]
    pub conf_overrides: BTreeMap<String, String>,
}

impl LndSettings {
    /// Get the path to the settings file
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("EmberLnd");

        // Ensure directory exists
        let _ = fs::create_dir_all(&config_dir);

        config_dir.join("lnd_settings.json")
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        log::info!("LND settings saved to {}", path.display());
        Ok(())
    }

    /// Build the daemon conf text: the default template patched with the
    /// standing overrides, then with call-site overrides (call-site wins).
    pub fn build_conf(&self, extra: &BTreeMap<String, String>) -> String {
        let mut combined = self.conf_overrides.clone();
        for (key, value) in extra {
            combined.insert(key.clone(), value.clone());
        }
        merge_conf(&combined)
    }
}
