use crate::components::Component;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::entities::Entity;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// Dense storage for every value of a single [Component] type.
///
/// `values[i]` was written for `owners[i]`.
/// A slot is live only while the index map of its owner points back at it;
/// re-adding a component without removing it first can leave unreferenced slots behind.
pub struct ComponentStorage<T> {
	values: Vec<T>,
	owners: Vec<Entity>,
	indices: HashMap<Entity, usize, Hasher>,
}

impl<T: Component> ComponentStorage<T> {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
			owners: Vec::with_capacity(capacity),
			indices: HashMap::with_capacity_and_hasher(capacity, Hasher::default()),
		}
	}

	/// Append `value` to the end of the storage and point `entity` at it.
	///
	/// Returns the previous slot of `entity`, which is left in place unreferenced.
	pub fn push(&mut self, entity: Entity, value: T) -> Option<usize> {
		let index = self.values.len();
		self.values.push(value);
		self.owners.push(entity);
		self.indices.insert(entity, index)
	}

	/// Overwrite the value of `entity` in place, or append it if there is none.
	///
	/// Returns the value that was overwritten.
	pub fn replace(&mut self, entity: Entity, value: T) -> Option<T> {
		match self.indices.get(&entity) {
			Some(&index) => Some(std::mem::replace(&mut self.values[index], value)),
			None => {
				self.push(entity, value);
				None
			},
		}
	}

	/// Remove the value of `entity` and shift every slot after it down by one.
	///
	/// Runs in O(n) over the index map of this storage only.
	pub fn remove(&mut self, entity: Entity) -> Option<T> {
		let index = self.indices.remove(&entity)?;
		let value = self.values.remove(index);
		self.owners.remove(index);

		for slot in self.indices.values_mut() {
			if *slot > index {
				*slot -= 1;
			}
		}

		Some(value)
	}

	#[inline]
	pub fn get(&self, entity: Entity) -> Option<&T> {
		let index = *self.indices.get(&entity)?;
		self.values.get(index)
	}

	#[inline]
	pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
		let index = *self.indices.get(&entity)?;
		self.values.get_mut(index)
	}

	/// The slot currently holding the value of `entity`.
	#[inline]
	pub fn index_of(&self, entity: Entity) -> Option<usize> {
		self.indices.get(&entity).copied()
	}

	#[inline]
	pub fn contains(&self, entity: Entity) -> bool {
		self.indices.contains_key(&entity)
	}

	/// Number of slots, unreferenced ones included.
	#[inline]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Number of entities holding a value.
	#[inline]
	pub fn entity_count(&self) -> usize {
		self.indices.len()
	}

	/// The raw slots in storage order, unreferenced ones included.
	pub fn as_slice(&self) -> &[T] {
		&self.values
	}

	/// Iterate over live `(entity, value)` pairs in storage order.
	pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
		let indices = &self.indices;
		self.owners
			.iter()
			.zip(self.values.iter())
			.enumerate()
			.filter(move |(i, (owner, _))| indices.get(*owner) == Some(i))
			.map(|(_, (owner, value))| (*owner, value))
	}

	/// Iterate over live `(entity, value)` pairs in storage order.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> + '_ {
		let indices = &self.indices;
		self.owners
			.iter()
			.zip(self.values.iter_mut())
			.enumerate()
			.filter(move |(i, (owner, _))| indices.get(*owner) == Some(i))
			.map(|(_, (owner, value))| (*owner, value))
	}

	pub fn clear(&mut self) {
		self.values.clear();
		self.owners.clear();
		self.indices.clear();
	}
}

impl<T: Component> Default for ComponentStorage<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// The type-erased view of a [ComponentStorage] held by a registry.
///
/// Only operations that don't need to know `T` live here;
/// everything else goes through a downcast to the concrete storage.
pub trait ErasedStorage {
	fn type_name(&self) -> &'static str;

	/// Remove the value of `entity`, returning whether there was one.
	fn remove_entity(&mut self, entity: Entity) -> bool;

	fn contains_entity(&self, entity: Entity) -> bool;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn clear(&mut self);

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStorage for ComponentStorage<T> {
	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}

	fn remove_entity(&mut self, entity: Entity) -> bool {
		self.remove(entity).is_some()
	}

	fn contains_entity(&self, entity: Entity) -> bool {
		self.contains(entity)
	}

	fn len(&self) -> usize {
		ComponentStorage::len(self)
	}

	fn clear(&mut self) {
		ComponentStorage::clear(self)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
