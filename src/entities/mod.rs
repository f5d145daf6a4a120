//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;  
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//!
//! Every [Entity] is created by an [EntityRegistry], which hands out identifiers in increasing order
//! and never reuses them.

mod entity;
mod entity_query;
mod entity_registry;

pub use entity::*;
pub use entity_query::*;
pub use entity_registry::*;
