//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities and serves every request against it. It is the "Server" side of the Actor
//! Model: one Tokio task, one receiver, requests handled strictly one after another.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store` needs
/// no `Mutex` or `RwLock`. Exclusive ownership inside the task is the lock, held for
/// exactly one request at a time.
///
/// # Implementation Details
///
/// The store is a `Vec` in insertion order; lookups scan by [`ActorEntity::id`]. Ids
/// come from the `next_id` closure supplied at construction.
///
/// * **Create**: issue an id, `from_create_params`, `on_create`, append, reply with a clone.
/// * **List**: reply with clones of every entity, in order.
/// * **Get**: reply with a clone, or `None`.
/// * **Update**: clone the record, run `on_update` on the copy, commit the copy on success.
/// * **Delete**: run `on_delete`, remove (order of the rest is kept), reply with the removed record.
/// * **Action**: clone the record, run `handle_action` on the copy, commit on success.
///
/// A failed hook leaves the stored record untouched.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Identifier generator called once per `Create`.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Preloads the store with existing entities, kept in the given order.
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = T>) -> Self {
        self.store.extend(entities);
        self
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook. This lets entities reach
    /// dependencies (like other clients) that were created *after* the actor was
    /// instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Product" instead of "catalog_cart::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.store[pos].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut working = self.store[pos].clone();
                    if let Err(e) = working.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store[pos] = working.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(working));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = self.store[pos].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(pos);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut working = self.store[pos].clone();
                    let result = working
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            self.store[pos] = working;
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
