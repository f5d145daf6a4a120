use crate::components::{Component, ComponentSet, ComponentType};
use crate::storages::{ComponentStorage, StorageStore};
use crate::config::{DestroyPolicy, DuplicatePolicy, RegistryConfig};
use crate::entities::{Entity, EntityFilter};
use crate::error::{EcsError, Result};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashSet;
use log::{debug, trace, warn};

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// A container for [Entities](crate::entities::Entity) and their associated [Components](crate::components::Component).
///
/// Each registry owns its own component storages, so any number of registries can coexist.
///
/// References returned by [get_component](Self::get_component) and [get_component_mut](Self::get_component_mut)
/// borrow the whole registry: they can't outlive the next call that adds or removes a component,
/// which is when the dense storage behind them may move.
pub struct EntityRegistry {
	config: RegistryConfig,
	next_id: u32,
	entities: Vec<Entity>,
	alive: HashSet<Entity, Hasher>,
	storage_store: StorageStore,
}

impl EntityRegistry {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			config,
			next_id: 0,
			entities: Vec::with_capacity(config.entity_capacity),
			alive: HashSet::with_capacity_and_hasher(config.entity_capacity, Hasher::default()),
			storage_store: StorageStore::with_capacity(config.storage_capacity),
		}
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	///
	/// # Panics
	/// If the registry has run out of identifiers. See [try_create_entity](Self::try_create_entity).
	pub fn create_entity(&mut self) -> Entity {
		match self.try_create_entity() {
			Ok(entity) => entity,
			Err(err) => panic!("{}", err),
		}
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	/// The identifier is strictly greater than every identifier handed out before by this registry.
	pub fn try_create_entity(&mut self) -> Result<Entity> {
		let id = self.next_id;
		self.next_id = match id.checked_add(1) {
			Some(next) => next,
			None => {
				warn!("Cannot create entity: identifier space exhausted after {} entities", id);
				return Err(EcsError::EntityIdsExhausted);
			},
		};

		let entity = Entity { id };
		self.entities.push(entity);
		self.alive.insert(entity);

		trace!("Created {}", entity);
		Ok(entity)
	}

	/// Destroys the provided [entity](Entity).
	/// The function will return *false* if the [entity](Entity) is not alive.
	///
	/// Whether its [components](Component) go with it depends on the registry's [DestroyPolicy].
	pub fn destroy_entity(&mut self, entity: Entity) -> bool {
		if !self.alive.remove(&entity) {
			return false;
		}

		if let Some(position) = self.entities.iter().position(|e| *e == entity) {
			self.entities.remove(position);
		}

		match self.config.destroy_policy {
			DestroyPolicy::Retain => trace!("Destroyed {}", entity),
			DestroyPolicy::Cascade => {
				let removed = self.storage_store.remove_entity(entity);
				trace!("Destroyed {} along with {} components", entity, removed);
			},
		}

		true
	}

	#[inline]
	pub fn is_alive(&self, entity: Entity) -> bool {
		self.alive.contains(&entity)
	}

	/// Returns a copy of all live [entities](Entity), in creation order.
	pub fn entities(&self) -> Vec<Entity> {
		self.entities.clone()
	}

	/// Number of live [entities](Entity).
	#[inline]
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	/// Add a new [component](Component) to the specified [entity](Entity).
	///
	/// The [entity](Entity) doesn't have to be alive.
	/// If it already holds a `T`, the registry's [DuplicatePolicy] decides what happens to the old value.
	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) {
		let policy = self.config.duplicate_policy;
		let storage = self.storage_store.get_or_create::<T>();

		match policy {
			DuplicatePolicy::Append => {
				if let Some(orphan) = storage.push(entity, value) {
					debug!(
						"{} already had a {}, slot {} is no longer referenced",
						entity,
						std::any::type_name::<T>(),
						orphan
					);
				}
			},
			DuplicatePolicy::Replace => {
				storage.replace(entity, value);
			},
		}

		trace!("Added {} to {}", std::any::type_name::<T>(), entity);
	}

	/// Remove a [component](Component) from the specified [entity](Entity).
	/// The function will return *None* if the [component](Component) is not present.
	///
	/// Every value stored after the removed one moves down by one slot.
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
		let value = self.storage_store.get_mut::<T>()?.remove(entity)?;
		trace!("Removed {} from {}", std::any::type_name::<T>(), entity);
		Some(value)
	}

	/// Gets a reference to a [component](Component) bound to a specific [entity](Entity).
	#[inline]
	pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
		self.storage_store.get::<T>()?.get(entity)
	}

	/// Gets a mutable reference to a [component](Component) bound to a specific [entity](Entity).
	#[inline]
	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
		self.storage_store.get_mut::<T>()?.get_mut(entity)
	}

	#[inline]
	pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
		self.storage_store.get::<T>().map_or(false, |s| s.contains(entity))
	}

	/// The slot of the [entity's](Entity) `T` inside the dense storage of `T`.
	pub fn component_index<T: Component>(&self, entity: Entity) -> Option<usize> {
		self.storage_store.get::<T>()?.index_of(entity)
	}

	/// Number of slots in the dense storage of `T`, including the ones left behind by [DuplicatePolicy::Append].
	pub fn component_count<T: Component>(&self) -> usize {
		self.storage_store.get::<T>().map_or(0, |s| s.len())
	}

	/// The dense storage of `T`, if any `T` has been added or registered.
	pub fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
		self.storage_store.get::<T>()
	}

	/// Creates the storages of the specified [components](Component) ahead of their first use.
	pub fn register_components(&mut self, components: &[ComponentType]) {
		for component in components {
			self.storage_store.register(component);
		}
	}

	/// Number of [component](Component) types with a storage in this registry.
	pub fn storage_count(&self) -> usize {
		self.storage_store.len()
	}

	/// Type names of every [component](Component) the [entity](Entity) holds, sorted.
	pub fn component_names(&self, entity: Entity) -> Vec<&'static str> {
		self.storage_store.component_names(entity)
	}

	/// Create a new filter over the live [entities](Entity) holding every [component](Component) in `I`.
	///
	/// ```
	/// # use dense_ecs::prelude::*;
	/// #[derive(Component)]
	/// struct Position(f32, f32);
	///
	/// let mut registry = EntityRegistry::new();
	/// let entity = registry.create_entity();
	/// registry.add_component(entity, Position(1.0, 2.0));
	///
	/// for (e, (position,)) in registry.filter::<(Position,)>() {
	///     assert_eq!(e, entity);
	///     assert_eq!(position.0, 1.0);
	/// }
	/// ```
	#[inline(always)]
	pub fn filter<I: ComponentSet>(&self) -> EntityFilter<'_, I, ()> {
		EntityFilter::new(self, &self.entities)
	}

	/// Visit every live [entity](Entity) holding a `T`, in the storage order of `T`.
	pub fn for_each_mut<T: Component>(&mut self, mut func: impl FnMut(Entity, &mut T)) {
		let alive = &self.alive;
		if let Some(storage) = self.storage_store.get_mut::<T>() {
			for (entity, value) in storage.iter_mut() {
				if alive.contains(&entity) {
					func(entity, value);
				}
			}
		}
	}

	/// Destroys every [entity](Entity) and empties every storage.
	/// Identifiers keep increasing from where they left off.
	pub fn clear(&mut self) {
		debug!("Clearing {} entities", self.entities.len());
		self.entities.clear();
		self.alive.clear();
		self.storage_store.clear();
	}
}

impl Default for EntityRegistry {
	fn default() -> Self {
		Self::new()
	}
}
