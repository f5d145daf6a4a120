use crate::components::{Component, ComponentId};
use crate::entities::{Entity, EntityRegistry};
use paste::paste;

/// A tuple of [Component] types that are looked up together for a single [Entity].
///
/// Implemented for `()` and for tuples of up to 8 component types.
/// Used by [EntityFilter](crate::entities::EntityFilter) to pick the entities it visits.
pub trait ComponentSet {
	/// Shared references to every component in the set.
	type Item<'r>;

	/// Fetch every component in the set, or `None` if any of them is missing.
	fn fetch(registry: &EntityRegistry, entity: Entity) -> Option<Self::Item<'_>>;

	/// Whether the entity holds at least one component of the set.
	fn any_present(registry: &EntityRegistry, entity: Entity) -> bool;

	fn component_ids() -> Vec<ComponentId>;
}

impl ComponentSet for () {
	type Item<'r> = ();

	#[inline(always)]
	fn fetch(_: &EntityRegistry, _: Entity) -> Option<()> {
		Some(())
	}

	#[inline(always)]
	fn any_present(_: &EntityRegistry, _: Entity) -> bool {
		false
	}

	fn component_ids() -> Vec<ComponentId> {
		vec![]
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        paste! {
            impl<$($t: Component),*> ComponentSet for ($($t,)*) {
                type Item<'r> = ($(&'r $t,)*);

                #[inline]
                fn fetch(registry: &EntityRegistry, entity: Entity) -> Option<Self::Item<'_>> {
                    $(let [<$t:lower>] = registry.get_component::<$t>(entity)?;)*
                    Some(($([<$t:lower>],)*))
                }

                #[inline]
                fn any_present(registry: &EntityRegistry, entity: Entity) -> bool {
                    $(registry.has_component::<$t>(entity))||*
                }

                fn component_ids() -> Vec<ComponentId> {
                    vec![$(<$t>::component_id()),*]
                }
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
