//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Product, Cart) implements to
//! be managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It names
//! the id, the DTOs, the custom actions, the injected context and the error type, and
//! provides the lifecycle hooks the actor calls while serving requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook when the actor is started (`run(context)`), not when it is
/// constructed, so dependencies such as other clients can be wired late.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AddItem`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per message: clients match on a single
    /// type, at the cost of some precision about which action can fail how.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identity of this entity. The actor uses it to locate the record in its store.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the freshly issued ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// The actor hands the hook a working copy of the stored record and commits it only
    /// if the hook returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action. Works on a copy, like `on_update`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
