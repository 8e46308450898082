//! # Generic Messages
//!
//! The request envelope sent from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to the standard lifecycle of a stored resource, plus `Action` for
/// resource-specific logic that doesn't fit CRUD.
///
/// - **Create**: issues a fresh id, builds the entity from [`ActorEntity::Create`], replies with the stored record.
/// - **List**: every stored entity, in insertion order.
/// - **Get**: a single entity by id, `None` when absent.
/// - **Update**: merges an [`ActorEntity::Update`] into the record, replies with the new state.
/// - **Delete**: removes the entity and replies with the removed record.
/// - **Action**: runs a custom [`ActorEntity::Action`].
///
/// The enum is generic over `T: ActorEntity`, so a product payload can never be sent to
/// the cart actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
