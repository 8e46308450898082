//! # Framework Errors
//!
//! Common error types shared by every resource actor and client. Resource-specific
//! errors (`ProductError`, `CartError`) are built on top of these.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns `true` when the requested id did not resolve to a stored entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound(_))
    }
}
