//! Test doubles for the daemon capability surface
//!
//! `MockLnd` is a scripted stand-in for the embedded daemon: lifecycle
//! verbs record their arguments, and command-channel replies are staged
//! per canonical method name. Shipped in the library so integration tests
//! and downstream hosts can drive the full stack without a daemon.

use crate::daemon::{CommandReply, LndDaemon};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted in-memory daemon double.
pub struct MockLnd {
    start_calls: AtomicUsize,
    seed_calls: AtomicUsize,
    unlock_calls: AtomicUsize,
    wallet_exists: AtomicBool,
    start_error: Mutex<Option<String>>,
    seed_words: Vec<String>,
    last_conf: Mutex<Option<String>>,
    exists_queries: Mutex<Vec<String>>,
    create_calls: Mutex<Vec<(String, Vec<String>)>>,
    commands: Mutex<Vec<(String, String)>>,
    replies: Mutex<HashMap<String, String>>,
}

impl Default for MockLnd {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLnd {
    pub fn new() -> Self {
        Self {
            start_calls: AtomicUsize::new(0),
            seed_calls: AtomicUsize::new(0),
            unlock_calls: AtomicUsize::new(0),
            wallet_exists: AtomicBool::new(false),
            start_error: Mutex::new(None),
            seed_words: ["absorb", "ability", "brass", "crater", "drill", "engine"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            last_conf: Mutex::new(None),
            exists_queries: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            commands: Mutex::new(Vec::new()),
            replies: Mutex::new(HashMap::new()),
        }
    }

    /// Make subsequent `start` calls fail with the given message
    pub fn fail_start(&self, message: &str) {
        *self.start_error.lock().unwrap() = Some(message.to_string());
    }

    /// Set whether a wallet exists for any network
    pub fn set_wallet_exists(&self, exists: bool) {
        self.wallet_exists.store(exists, Ordering::SeqCst);
    }

    /// Stage an armored reply for a canonical method name
    pub fn stage_reply(&self, method: &str, payload: String) {
        self.replies
            .lock()
            .unwrap()
            .insert(method.to_string(), payload);
    }

    /// Number of times `start` was invoked
    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    /// Number of times `gen_seed` was invoked
    pub fn seed_calls(&self) -> usize {
        self.seed_calls.load(Ordering::SeqCst)
    }

    /// Number of times `unlock` was invoked
    pub fn unlock_calls(&self) -> usize {
        self.unlock_calls.load(Ordering::SeqCst)
    }

    /// The seed words `gen_seed` hands out
    pub fn seed_words(&self) -> Vec<String> {
        self.seed_words.clone()
    }

    /// Configuration text from the most recent `start`
    pub fn last_conf(&self) -> Option<String> {
        self.last_conf.lock().unwrap().clone()
    }

    /// Networks passed to `wallet_exists`, in call order
    pub fn exists_queries(&self) -> Vec<String> {
        self.exists_queries.lock().unwrap().clone()
    }

    /// `(password, seed_words)` pairs passed to `create_wallet`
    pub fn create_calls(&self) -> Vec<(String, Vec<String>)> {
        self.create_calls.lock().unwrap().clone()
    }

    /// `(method, payload)` pairs sent over the command channel
    pub fn commands(&self) -> Vec<(String, String)> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl LndDaemon for MockLnd {
    async fn start(&self, conf: &str) -> Result<(), String> {
        if let Some(message) = self.start_error.lock().unwrap().clone() {
            return Err(message);
        }
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_conf.lock().unwrap() = Some(conf.to_string());
        Ok(())
    }

    async fn gen_seed(&self) -> Result<Vec<String>, String> {
        self.seed_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed_words.clone())
    }

    async fn create_wallet(&self, password: &str, seed: &[String]) -> Result<String, String> {
        self.create_calls
            .lock()
            .unwrap()
            .push((password.to_string(), seed.to_vec()));
        Ok("wallet created".to_string())
    }

    async fn wallet_exists(&self, network: &str) -> Result<bool, String> {
        self.exists_queries.lock().unwrap().push(network.to_string());
        Ok(self.wallet_exists.load(Ordering::SeqCst))
    }

    async fn unlock(&self, _password: &str) -> Result<String, String> {
        self.unlock_calls.fetch_add(1, Ordering::SeqCst);
        Ok("wallet unlocked".to_string())
    }

    async fn send_command(&self, method: &str, payload: &str) -> Result<CommandReply, String> {
        self.commands
            .lock()
            .unwrap()
            .push((method.to_string(), payload.to_string()));

        let reply = self.replies.lock().unwrap().get(method).cloned();
        match reply {
            Some(data) => Ok(CommandReply { data }),
            None => Err(format!("no reply staged for {}", method)),
        }
    }
}
