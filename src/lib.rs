extern crate self as dense_ecs;

pub mod components;
pub mod entities;
pub mod storages;
pub mod systems;
mod config;
mod context;
mod error;

pub use lazy_static::lazy_static;
pub use config::*;
pub use error::*;
pub use context::EcsContext;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::context::EcsContext;
	pub use crate::register_components;
	pub use crate::storages::ComponentStorage;
	pub use crate::error::EcsError;
	pub use crate::entities::{Entity, EntityFilter, EntityRegistry};
	pub use crate::config::{DestroyPolicy, DuplicatePolicy, RegistryConfig};
}

#[cfg(test)]
mod tests;
