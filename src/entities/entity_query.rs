use crate::entities::{Entity, EntityRegistry};
use crate::components::ComponentSet;
use std::marker::PhantomData;
use std::slice::Iter;

/// Iterates over the live [entities](Entity) of a registry that hold every component of `I`
/// and none of `E`, in creation order.
///
/// Created by [EntityRegistry::filter].
pub struct EntityFilter<'r, I: ComponentSet, E: ComponentSet = ()> {
	registry: &'r EntityRegistry,
	entities: Iter<'r, Entity>,
	phantom: PhantomData<fn() -> (I, E)>,
}

impl<'r, I: ComponentSet, E: ComponentSet> EntityFilter<'r, I, E> {
	pub(crate) fn new(registry: &'r EntityRegistry, entities: &'r [Entity]) -> Self {
		Self {
			registry,
			entities: entities.iter(),
			phantom: PhantomData,
		}
	}

	/// It specifies which [components](crate::components::Component) an [entity](Entity) must not include
	/// to be picked up by the [EntityFilter].
	pub fn exclude<TE: ComponentSet>(self) -> EntityFilter<'r, I, TE> {
		EntityFilter {
			registry: self.registry,
			entities: self.entities,
			phantom: PhantomData,
		}
	}
}

impl<'r, I: ComponentSet, E: ComponentSet> Iterator for EntityFilter<'r, I, E> {
	type Item = (Entity, I::Item<'r>);

	fn next(&mut self) -> Option<Self::Item> {
		let registry = self.registry;
		self.entities.by_ref().find_map(|&entity| {
			if E::any_present(registry, entity) {
				return None;
			}
			I::fetch(registry, entity).map(|item| (entity, item))
		})
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.entities.size_hint().1)
	}
}
