//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a running actor. Use it to test code
//! that *depends on* an actor (e.g. the cart actor resolving products) without spawning
//! that dependency.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic**: drive a domain client against [`create_mock_client`] and assert on
//!    the raw [`ResourceRequest`]s with [`expect_get`], [`expect_create`], [`expect_action`].
//! 2. **Single actor**: spawn one real `ResourceActor` with a sequential id generator.
//! 3. **Actor with mocked dependencies**: run a real actor whose `Context` is built from a
//!    `MockClient` (see `tests/cart_actor_test.rs`).
//! 4. **Full system**: `CatalogSystem` with every actor real (see `tests/integration_test.rs`).
//!
//! ```rust
//! use catalog_cart::framework::mock::MockClient;
//! use catalog_cart::model::{Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Product>::new();
//!     mock.expect_get(ProductId::from("p1")).return_ok(None);
//!
//!     let client = mock.client();
//!     assert!(client.get(ProductId::from("p1")).await.unwrap().is_none());
//!     mock.verify();
//! }
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(PoisonError::into_inner)
}

fn expect_id<T: ActorEntity>(kind: &str, actual: &T::Id, expected: &T::Id) {
    assert_eq!(actual, expected, "{kind} request for unexpected id");
}

/// A scripted stand-in for a running `ResourceActor`.
///
/// Expectations are consumed in FIFO order; a request that doesn't match the next
/// expectation panics the mock task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
///
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_get(ProductId::from("p1")).return_ok(Some(product));
/// let client = mock.client();
/// // ... exercise code under test ...
/// mock.verify(); // every expectation was consumed
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        expect_id::<T>("Get", &id, &expected);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        expect_id::<T>("Update", &id, &expected);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        expect_id::<T>("Delete", &id, &expected);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        expect_id::<T>("Action", &id, &expected);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get {
            id,
            response,
        })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update {
            id,
            response,
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete {
            id,
            response,
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Action {
            id,
            response,
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// RAW REQUEST HELPERS
// =============================================================================

/// Creates a client plus the receiving end of its channel.
///
/// The test plays the actor: it pulls requests off `receiver`, asserts on them and
/// answers through the embedded responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
