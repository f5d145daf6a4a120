use crate::systems::{System, SystemStore};
use crate::entities::EntityRegistry;
use crate::config::RegistryConfig;
use std::ops::{Deref, DerefMut};
use crate::error::Result;

/// A container for [`entities`](crate::entities::Entity) and [`systems`](System).
///
/// All [`entities`](crate::entities::Entity) can be referenced using a unique identifier
/// and can hold at most one [`component`](crate::components::Component) of each type.
/// The context dereferences to its [`EntityRegistry`].
pub struct EcsContext {
	registry: EntityRegistry,
	system_store: SystemStore,
}

impl EcsContext {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			registry: EntityRegistry::with_config(config),
			system_store: SystemStore::new(),
		}
	}

	/// Add a new [system](System) to the [EcsContext].
	/// Each system type can only be added once, and only before [setup_systems](Self::setup_systems).
	pub fn register_system<T: System>(&mut self, system: T) -> Result<()> {
		self.system_store.add_system(system)
	}

	/// Initialize all [systems](System)
	/// Must be called before any system can be run.
	pub fn setup_systems(&mut self) -> Result<()> {
		self.system_store.setup_systems(&mut self.registry)
	}

	/// Execute all [systems](System) in registration order.
	pub fn run_systems(&mut self) -> Result<()> {
		self.system_store.run_systems(&mut self.registry)
	}

	pub fn system_count(&self) -> usize {
		self.system_store.len()
	}
}

impl Default for EcsContext {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for EcsContext {
	type Target = EntityRegistry;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.registry
	}
}

impl DerefMut for EcsContext {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.registry
	}
}
