/// Error type for intake flows.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// User abandoned the questionnaire (Ctrl+C, closed window, etc.)
    #[error("Intake cancelled by user")]
    Cancelled,

    /// Front-end specific failure (I/O, UI framework crash, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl IntakeError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
