//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.
//! [Component ids](ComponentId) only name types: the storage for a type always belongs to
//! a single [EntityRegistry](crate::entities::EntityRegistry).

use crate::components::Component;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::any::TypeId;
use std::fmt;

lazy_static! {
	static ref TYPE_TO_ID: Mutex<HashMap<TypeId, ComponentId>> = Mutex::new(HashMap::default());
}

/// A process-wide identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`.
	#[inline(always)]
	pub fn of<T: Component>() -> ComponentId {
		T::component_id()
	}

	/// Look up the [ComponentId] of any `'static` type, assigning a new one on first use.
	///
	/// [`Component::component_id`] caches the result of this call when derived,
	/// so user code should prefer [`ComponentId::of`].
	pub fn of_type<T: 'static>() -> ComponentId {
		let mut table = TYPE_TO_ID.lock();
		let next = ComponentId { value: table.len() };
		*table.entry(TypeId::of::<T>()).or_insert(next)
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}

impl fmt::Display for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.value)
	}
}
