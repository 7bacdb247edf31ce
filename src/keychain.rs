//! Secure credential store boundary
//!
//! The wallet seed and password are persisted through an opaque key/value
//! capability. Platform hosts back this with their secure storage; the
//! in-memory implementation here serves embedded tests and short-lived
//! tooling.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the wallet seed phrase.
pub const SEED_KEY: &str = "lightningMnemonic";

/// Storage key for the wallet password.
pub const PASSWORD_KEY: &str = "lightningPassword";

/// Opaque get/set capability over the platform credential store.
#[async_trait]
pub trait Keychain: Send + Sync {
    /// Persist a value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), String>;

    /// Retrieve the value stored under a key, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
}

/// Process-local keychain. Values do not survive the process.
#[derive(Debug, Default)]
pub struct MemoryKeychain {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeychain {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Keychain for MemoryKeychain {
    async fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_keychain_roundtrip() {
        let keychain = MemoryKeychain::new();
        assert_eq!(keychain.get(SEED_KEY).await.unwrap(), None);

        keychain.set(SEED_KEY, "abandon ability able").await.unwrap();
        assert_eq!(
            keychain.get(SEED_KEY).await.unwrap(),
            Some("abandon ability able".to_string())
        );
    }

    #[tokio::test]
    async fn test_memory_keychain_overwrites() {
        let keychain = MemoryKeychain::new();
        keychain.set(PASSWORD_KEY, "first").await.unwrap();
        keychain.set(PASSWORD_KEY, "second").await.unwrap();
        assert_eq!(
            keychain.get(PASSWORD_KEY).await.unwrap(),
            Some("second".to_string())
        );
    }
}
