use crate::entities::EntityRegistry;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
pub trait System: 'static {
	/// Initialises the [System].
	/// **This function should not be called by user code.**
	fn setup(&mut self, _registry: &mut EntityRegistry) {}

	/// Executes the system
	fn run(&mut self, registry: &mut EntityRegistry);
}
