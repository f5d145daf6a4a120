/// Create the storages of the specified [components](crate::components::Component)
/// in an [EntityRegistry](crate::entities::EntityRegistry) ahead of their first use.
#[macro_export]
macro_rules! register_components {
    ($registry: expr, [$($t: ty),* $(,)?]) => {
		$registry.register_components(&[
			$($crate::components::ComponentType::of::<$t>()),*
		])
	};
}
