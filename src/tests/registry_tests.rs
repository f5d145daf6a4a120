use crate::tests::components::{Enemy, Health, InputIntent, Player, Position, Sprite, Text, Velocity};
use crate::config::{DestroyPolicy, DuplicatePolicy, RegistryConfig};
use crate::entities::EntityRegistry;
use crate::tests::init_logging;

#[test]
pub fn entity_ids_increase_monotonically() {
	init_logging();
	let mut registry = EntityRegistry::new();

	let mut last = registry.create_entity();
	for i in 0..1024 {
		let entity = registry.create_entity();
		assert!(entity.id() > last.id(), "Identifiers must strictly increase");

		// Destroying entities must never free their identifiers for reuse.
		if i % 3 == 0 {
			registry.destroy_entity(entity);
		}
		last = entity;
	}
}

#[test]
pub fn registries_are_independent() {
	let mut a = EntityRegistry::new();
	let mut b = EntityRegistry::new();

	let ea = a.create_entity();
	let eb = b.create_entity();
	assert_eq!(ea, eb, "Each registry counts its own identifiers");

	a.add_component(ea, Health(1));
	assert_eq!(b.get_component::<Health>(eb), None, "Storage must not be shared between registries");
	assert_eq!(b.storage_count(), 0);
}

#[test]
pub fn add_then_get_multiple_types() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();

	registry.add_component(e1, Position { x: 0.0, y: 0.0 });
	registry.add_component(e1, Velocity { x: 5, y: 0 });

	assert_eq!(registry.get_component::<Position>(e1), Some(&Position { x: 0.0, y: 0.0 }));
	assert_eq!(registry.get_component::<Velocity>(e1), Some(&Velocity { x: 5, y: 0 }));
}

#[test]
pub fn owned_payloads_round_trip() {
	let mut registry = EntityRegistry::new();
	let player = registry.create_entity();
	let text = Text {
		text: String::from("Player"),
		font: String::from("resources/arial.ttf"),
		size: 28,
	};

	registry.add_component(player, Player { name: String::from("Player 1"), health: 10 });
	registry.add_component(player, text.clone());

	assert_eq!(registry.get_component::<Text>(player), Some(&text));
	assert_eq!(registry.get_component::<Player>(player).map(|p| p.name.as_str()), Some("Player 1"));
	assert_eq!(registry.remove_component::<Text>(player), Some(text));
}

#[test]
pub fn remove_reindexes_later_entities() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	let e2 = registry.create_entity();
	let e3 = registry.create_entity();

	for entity in [e1, e2, e3] {
		registry.add_component(entity, Health(1));
	}
	assert_eq!(registry.component_index::<Health>(e3), Some(2));

	registry.remove_component::<Health>(e1);

	assert_eq!(registry.get_component::<Health>(e1), None);
	assert_eq!(registry.get_component::<Health>(e2), Some(&Health(1)));
	assert_eq!(registry.component_index::<Health>(e2), Some(0));
	assert_eq!(registry.get_component::<Health>(e3), Some(&Health(1)));
	assert_eq!(registry.component_index::<Health>(e3), Some(1));
	assert_eq!(registry.component_count::<Health>(), 2);
}

#[test]
pub fn remove_keeps_values_of_other_entities() {
	let mut registry = EntityRegistry::new();
	let entities: Vec<_> = (0..8).map(|_| registry.create_entity()).collect();
	for (i, entity) in entities.iter().enumerate() {
		registry.add_component(*entity, Health(i as i32));
	}

	registry.remove_component::<Health>(entities[3]);

	for (i, entity) in entities.iter().enumerate() {
		let expected = if i == 3 { None } else { Some(Health(i as i32)) };
		assert_eq!(registry.get_component::<Health>(*entity).copied(), expected);
	}
}

#[test]
pub fn missing_component_is_none() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();

	assert_eq!(registry.get_component::<Sprite>(e1), None);
	assert_eq!(registry.get_component_mut::<Sprite>(e1), None);
	assert!(!registry.has_component::<Sprite>(e1));
	assert_eq!(registry.remove_component::<Sprite>(e1), None);
	assert_eq!(registry.component_count::<Sprite>(), 0);
	assert_eq!(registry.storage_count(), 0, "Lookups must not create storage");
}

#[test]
pub fn remove_twice_is_idempotent() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	let e2 = registry.create_entity();
	registry.add_component(e1, Health(1));
	registry.add_component(e2, Health(2));

	assert_eq!(registry.remove_component::<Health>(e1), Some(Health(1)));
	assert_eq!(registry.remove_component::<Health>(e1), None);

	assert_eq!(registry.component_count::<Health>(), 1);
	assert_eq!(registry.component_index::<Health>(e2), Some(0));
	assert_eq!(registry.get_component::<Health>(e2), Some(&Health(2)));
}

#[test]
pub fn types_do_not_interact() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	let e2 = registry.create_entity();

	registry.add_component(e1, Position { x: 1.0, y: 1.0 });
	registry.add_component(e2, Position { x: 2.0, y: 2.0 });
	registry.add_component(e1, Velocity { x: 1, y: 1 });
	registry.add_component(e2, Velocity { x: 2, y: 2 });

	registry.remove_component::<Velocity>(e1);
	registry.add_component(e1, Health(3));

	assert_eq!(registry.get_component::<Position>(e1), Some(&Position { x: 1.0, y: 1.0 }));
	assert_eq!(registry.get_component::<Position>(e2), Some(&Position { x: 2.0, y: 2.0 }));
	assert_eq!(registry.component_index::<Position>(e2), Some(1), "Another type's removal must not shift this storage");
	assert_eq!(registry.get_component::<Velocity>(e2), Some(&Velocity { x: 2, y: 2 }));
}

#[test]
pub fn destroy_removes_from_enumeration() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	let e2 = registry.create_entity();

	assert!(registry.destroy_entity(e2));

	assert_eq!(registry.entities(), vec![e1]);
	assert!(registry.is_alive(e1));
	assert!(!registry.is_alive(e2));
	assert_eq!(registry.len(), 1);
}

#[test]
pub fn destroy_twice_is_idempotent() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	let e2 = registry.create_entity();
	let e3 = registry.create_entity();

	assert!(registry.destroy_entity(e2));
	assert!(!registry.destroy_entity(e2));
	assert_eq!(registry.entities(), vec![e1, e3]);
}

#[test]
pub fn entities_preserve_creation_order() {
	let mut registry = EntityRegistry::new();
	let entities: Vec<_> = (0..6).map(|_| registry.create_entity()).collect();

	registry.destroy_entity(entities[0]);
	registry.destroy_entity(entities[4]);

	assert_eq!(registry.entities(), vec![entities[1], entities[2], entities[3], entities[5]]);
}

#[test]
pub fn entities_is_a_snapshot() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	let e2 = registry.create_entity();

	let snapshot = registry.entities();
	for entity in &snapshot {
		registry.destroy_entity(*entity);
	}
	registry.create_entity();

	assert_eq!(snapshot, vec![e1, e2]);
	assert_eq!(registry.len(), 1);
}

#[test]
pub fn destroy_retains_components_by_default() {
	init_logging();
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	registry.add_component(e1, Health(4));
	registry.add_component(e1, Position { x: 3.0, y: 4.0 });

	registry.destroy_entity(e1);

	assert!(!registry.entities().contains(&e1));
	assert_eq!(registry.get_component::<Health>(e1), Some(&Health(4)), "Components outlive their entity");
	assert_eq!(registry.component_count::<Position>(), 1);
	assert_eq!(registry.component_names(e1).len(), 2);
}

#[test]
pub fn destroy_cascades_when_configured() {
	init_logging();
	let config = RegistryConfig::new().with_destroy_policy(DestroyPolicy::Cascade);
	let mut registry = EntityRegistry::with_config(config);

	let e1 = registry.create_entity();
	let e2 = registry.create_entity();
	for entity in [e1, e2] {
		registry.add_component(entity, Health(entity.id() as i32));
		registry.add_component(entity, Position { x: 0.0, y: 0.0 });
	}

	registry.destroy_entity(e1);

	assert_eq!(registry.get_component::<Health>(e1), None);
	assert_eq!(registry.get_component::<Position>(e1), None);
	assert!(registry.component_names(e1).is_empty());
	assert_eq!(registry.get_component::<Health>(e2), Some(&Health(e2.id() as i32)));
	assert_eq!(registry.component_index::<Health>(e2), Some(0), "Cascade must compact like remove_component");
	assert_eq!(registry.component_count::<Health>(), 1);
}

#[test]
pub fn cascade_does_not_touch_dead_entities() {
	let config = RegistryConfig::new().with_destroy_policy(DestroyPolicy::Cascade);
	let mut registry = EntityRegistry::with_config(config);
	let e1 = registry.create_entity();
	registry.destroy_entity(e1);

	// Components added after destruction are kept; a second destroy is a no-op.
	registry.add_component(e1, Health(1));
	assert!(!registry.destroy_entity(e1));
	assert_eq!(registry.get_component::<Health>(e1), Some(&Health(1)));
}

#[test]
pub fn duplicate_add_appends_by_default() {
	init_logging();
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();

	registry.add_component(e1, Position { x: 10.0, y: 10.0 });
	registry.add_component(e1, Position { x: 20.0, y: 20.0 });

	assert_eq!(registry.get_component::<Position>(e1), Some(&Position { x: 20.0, y: 20.0 }));
	assert_eq!(registry.component_count::<Position>(), 2, "The first value is left behind unreferenced");
	assert_eq!(registry.component_index::<Position>(e1), Some(1));
}

#[test]
pub fn duplicate_add_replaces_when_configured() {
	let config = RegistryConfig::new().with_duplicate_policy(DuplicatePolicy::Replace);
	let mut registry = EntityRegistry::with_config(config);
	let e1 = registry.create_entity();

	registry.add_component(e1, Position { x: 10.0, y: 10.0 });
	registry.add_component(e1, Position { x: 20.0, y: 20.0 });

	assert_eq!(registry.get_component::<Position>(e1), Some(&Position { x: 20.0, y: 20.0 }));
	assert_eq!(registry.component_count::<Position>(), 1);
	assert_eq!(registry.component_index::<Position>(e1), Some(0));
}

#[test]
pub fn add_to_unknown_entity() {
	let mut registry = EntityRegistry::new();
	let real = registry.create_entity();

	let mut other = EntityRegistry::new();
	other.create_entity();
	let foreign = other.create_entity();

	registry.add_component(foreign, Enemy { health: 1 });

	assert!(!registry.is_alive(foreign));
	assert_eq!(registry.get_component::<Enemy>(foreign), Some(&Enemy { health: 1 }));
	assert_eq!(registry.entities(), vec![real]);
}

#[test]
pub fn get_component_mut_writes_through() {
	let mut registry = EntityRegistry::new();
	let player = registry.create_entity();
	registry.add_component(player, InputIntent::default());

	if let Some(input) = registry.get_component_mut::<InputIntent>(player) {
		input.left = true;
	}

	assert!(registry.get_component::<InputIntent>(player).map_or(false, |i| i.left));
}

#[test]
pub fn for_each_mut_skips_dead_entities() {
	let mut registry = EntityRegistry::new();
	let entities: Vec<_> = (0..4).map(|_| registry.create_entity()).collect();
	for entity in &entities {
		registry.add_component(*entity, Velocity { x: 1, y: 0 });
	}
	registry.destroy_entity(entities[2]);

	let mut visited = vec![];
	registry.for_each_mut::<Velocity>(|entity, velocity| {
		velocity.x *= -1;
		visited.push(entity);
	});

	assert_eq!(visited, vec![entities[0], entities[1], entities[3]]);
	assert_eq!(registry.get_component::<Velocity>(entities[2]), Some(&Velocity { x: 1, y: 0 }));
	assert_eq!(registry.get_component::<Velocity>(entities[3]), Some(&Velocity { x: -1, y: 0 }));

	// No storage for the type yet: nothing to visit.
	registry.for_each_mut::<Health>(|_, _| panic!("No entity holds a Health"));
}

#[test]
pub fn clear_keeps_counting() {
	let mut registry = EntityRegistry::new();
	let e1 = registry.create_entity();
	registry.add_component(e1, Health(1));

	registry.clear();

	assert!(registry.is_empty());
	assert_eq!(registry.get_component::<Health>(e1), None);
	assert_eq!(registry.storage_count(), 1);

	let e2 = registry.create_entity();
	assert!(e2.id() > e1.id(), "Clearing must not recycle identifiers");
}
