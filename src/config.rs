/// What happens to the components of an [entity](crate::entities::Entity) when it is destroyed.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DestroyPolicy {
	/// Components stay in their storages and can still be looked up by the destroyed entity.
	#[default]
	Retain,
	/// Components are removed from every storage along with the entity.
	Cascade,
}

/// What happens when a [component](crate::components::Component) is added to an entity that already has one of that type.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DuplicatePolicy {
	/// The new value is appended and the entity is pointed at it.
	/// The old value stays in the storage without any entity referencing it.
	#[default]
	Append,
	/// The old value is overwritten in place.
	Replace,
}

/// Settings for an [EntityRegistry](crate::entities::EntityRegistry).
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
	pub destroy_policy: DestroyPolicy,
	pub duplicate_policy: DuplicatePolicy,
	/// Number of entities to reserve space for up front.
	pub entity_capacity: usize,
	/// Number of values to reserve in every component storage when it is created.
	pub storage_capacity: usize,
}

impl RegistryConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_destroy_policy(mut self, policy: DestroyPolicy) -> Self {
		self.destroy_policy = policy;
		self
	}

	pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicate_policy = policy;
		self
	}

	pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
		self.entity_capacity = capacity;
		self
	}

	pub fn with_storage_capacity(mut self, capacity: usize) -> Self {
		self.storage_capacity = capacity;
		self
	}
}
