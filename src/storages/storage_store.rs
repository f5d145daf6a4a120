use crate::storages::{ComponentStorage, ErasedStorage};
use crate::components::{Component, ComponentId, ComponentType};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::entities::Entity;
use log::debug;

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

/// Owns the [storage](ComponentStorage) of every component type used by one registry.
pub(crate) struct StorageStore {
	capacity: usize,
	storages: HashMap<ComponentId, Box<dyn ErasedStorage>, Hasher>,
}

impl StorageStore {
	/// `capacity` is reserved in every storage created from now on.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			capacity,
			storages: HashMap::default(),
		}
	}

	/// Create the storage of `component` if it doesn't exist yet.
	/// Returns *false* if it was already present.
	pub fn register(&mut self, component: &ComponentType) -> bool {
		if self.storages.contains_key(&component.id()) {
			return false;
		}

		debug!("Creating storage for {} ({})", component.name(), component.id());
		self.storages.insert(component.id(), component.make_storage(self.capacity));
		true
	}

	pub fn get<T: Component>(&self) -> Option<&ComponentStorage<T>> {
		let storage = self.storages.get(&ComponentId::of::<T>())?;
		storage.as_any().downcast_ref()
	}

	pub fn get_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
		let storage = self.storages.get_mut(&ComponentId::of::<T>())?;
		storage.as_any_mut().downcast_mut()
	}

	/// Get the storage of `T`, creating it on first use.
	pub fn get_or_create<T: Component>(&mut self) -> &mut ComponentStorage<T> {
		let capacity = self.capacity;
		let storage = self.storages.entry(ComponentId::of::<T>()).or_insert_with(|| {
			debug!("Creating storage for {} ({})", std::any::type_name::<T>(), ComponentId::of::<T>());
			Box::new(ComponentStorage::<T>::with_capacity(capacity)) as Box<dyn ErasedStorage>
		});

		storage
			.as_any_mut()
			.downcast_mut()
			.expect("Component id is bound to a storage of a different type")
	}

	/// Remove `entity` from every storage.
	/// Returns how many storages held a value for it.
	pub fn remove_entity(&mut self, entity: Entity) -> usize {
		self.storages.values_mut().map(|s| s.remove_entity(entity) as usize).sum()
	}

	/// Names of the component types `entity` currently holds a value of.
	pub fn component_names(&self, entity: Entity) -> Vec<&'static str> {
		let mut names: Vec<_> = self
			.storages
			.values()
			.filter(|s| s.contains_entity(entity))
			.map(|s| s.type_name())
			.collect();

		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.storages.len()
	}

	/// Empty every storage while keeping them registered.
	pub fn clear(&mut self) {
		self.storages.values_mut().for_each(|s| s.clear());
	}
}
