//! # Validation Log
//!
//! The seam through which the validator reports failed checks. The caller
//! owns the sink and its lifecycle (file handle, buffer, collector) and hands
//! it to [`crate::Validator::new`]; the core never opens a destination itself.

use std::sync::Arc;

/// Receives one human-readable message per failed check.
pub trait ValidationLog {
    /// Record a message.
    fn record(&self, message: &str);
}

impl<T: ValidationLog + ?Sized> ValidationLog for &T {
    fn record(&self, message: &str) {
        (**self).record(message)
    }
}

impl<T: ValidationLog + ?Sized> ValidationLog for Arc<T> {
    fn record(&self, message: &str) {
        (**self).record(message)
    }
}

impl<T: ValidationLog + ?Sized> ValidationLog for Box<T> {
    fn record(&self, message: &str) {
        (**self).record(message)
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl ValidationLog for NoopLog {
    fn record(&self, _message: &str) {}
}

/// Forwards every message as a `tracing` info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ValidationLog for TracingLog {
    fn record(&self, message: &str) {
        tracing::info!(target: "svid::validation", "{message}");
    }
}
