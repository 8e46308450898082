//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod cart;
pub mod ids;
pub mod product;

pub use cart::*;
pub use ids::*;
pub use product::*;
