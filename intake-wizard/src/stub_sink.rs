//! Stub sink for testing wizard flows without a network.
//!
//! Mirrors the role a test backend plays for interactive flows: exercises
//! the full submit path, records what would have been sent, and succeeds or
//! fails on command.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{SubmitError, SubmitPayload, SubmitSink};

/// A sink that records payloads and returns a pre-configured outcome.
#[derive(Debug, Default)]
pub struct StubSink {
    fail_with_status: Option<u16>,
    received: Mutex<Vec<SubmitPayload>>,
}

impl StubSink {
    /// A sink that acknowledges every delivery.
    pub fn ok() -> Self {
        Self::default()
    }

    /// A sink that rejects every delivery with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Payloads delivered so far, in order.
    pub fn received(&self) -> Vec<SubmitPayload> {
        self.received.lock().expect("sink lock poisoned").clone()
    }
}

#[async_trait]
impl SubmitSink for StubSink {
    async fn submit(&self, payload: &SubmitPayload) -> Result<(), SubmitError> {
        self.received
            .lock()
            .expect("sink lock poisoned")
            .push(payload.clone());
        match self.fail_with_status {
            Some(status) => Err(SubmitError::Status { status }),
            None => Ok(()),
        }
    }
}
