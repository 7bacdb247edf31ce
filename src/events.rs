//! Lifecycle event boundary
//!
//! Push delivery to the hosting application goes through an opaque
//! publish/subscribe substrate. This crate only emits coarse lifecycle
//! transitions; hosts route them to their own event bus.

use serde::Serialize;

/// Lifecycle transitions reported to the host.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum NodeEvent {
    DaemonStarted,
    WalletInitialized,
    WalletUnlocked,
}

/// Sink for lifecycle events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: NodeEvent);
}

/// Discards all events. The default when the host does not subscribe.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: NodeEvent) {}
}
