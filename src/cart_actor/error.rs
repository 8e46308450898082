//! Error types for the Cart actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// The product store could not be reached while resolving items.
    #[error("Product lookup failed: {0}")]
    ProductLookup(String),

    /// The actor replied with a result that doesn't belong to the request.
    #[error("Unexpected cart response: {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            // Errors raised by the cart entity itself travel boxed; unwrap them.
            FrameworkError::EntityError(source) => match source.downcast_ref::<CartError>() {
                Some(cart_error) => cart_error.clone(),
                None => CartError::ActorCommunicationError(source.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
