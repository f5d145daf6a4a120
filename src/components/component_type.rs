use crate::storages::{ComponentStorage, ErasedStorage};
use crate::components::ComponentId;
use std::hash::{Hash, Hasher};
use std::fmt;

/// Data that can be attached to an [Entity](crate::entities::Entity).
///
/// Usually implemented through #\[derive([`Component`](dense_ecs_derive::Component))],
/// which caches the [ComponentId] of the type.
/// A bare `impl Component for T {}` works too; it looks the id up on every call.
pub trait Component: 'static + Sized {
	fn component_id() -> ComponentId {
		ComponentId::of_type::<Self>()
	}
}

/// A runtime representation of a type implementing the [`Component`] trait.
#[derive(Clone)]
pub struct ComponentType {
	id: ComponentId,
	name: &'static str,
	make_storage: fn(usize) -> Box<dyn ErasedStorage>,
}

impl ComponentType {
	/// Returns the [`ComponentType`] of T.
	pub fn of<T: Component>() -> Self {
		Self {
			id: ComponentId::of::<T>(),
			name: std::any::type_name::<T>(),
			make_storage: |capacity| Box::new(ComponentStorage::<T>::with_capacity(capacity)) as Box<dyn ErasedStorage>,
		}
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Builds an empty storage for this type with room for `capacity` values.
	pub fn make_storage(&self, capacity: usize) -> Box<dyn ErasedStorage> {
		(self.make_storage)(capacity)
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl fmt::Debug for ComponentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentType").field("id", &self.id).field("name", &self.name).finish()
	}
}
