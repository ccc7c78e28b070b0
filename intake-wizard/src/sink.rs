use async_trait::async_trait;

use crate::SubmitPayload;

/// Error type for submission delivery.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The wizard was not ready to submit: not on the last question, the
    /// last answer did not validate, or the flow already completed.
    #[error("Wizard is not ready to submit")]
    NotReady,

    /// The endpoint answered with a non-success HTTP status.
    #[error("Submission endpoint returned status {status}")]
    Status { status: u16 },

    /// The request never got an HTTP answer (DNS, connect, TLS, ...).
    #[error("Transport error: {0}")]
    Transport(#[source] anyhow::Error),
}

impl SubmitError {
    /// Create a transport error from any error type.
    pub fn transport(err: impl Into<anyhow::Error>) -> Self {
        Self::Transport(err.into())
    }
}

/// Delivery target for a completed questionnaire.
///
/// The wizard issues exactly one delivery per submit attempt and judges
/// success solely by the sink's `Ok`. Sinks decide the wire format; see the
/// `intake-web3forms` crate for the HTTP implementation.
#[async_trait]
pub trait SubmitSink: Send + Sync {
    async fn submit(&self, payload: &SubmitPayload) -> Result<(), SubmitError>;
}
