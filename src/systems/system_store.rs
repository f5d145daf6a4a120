use crate::entities::EntityRegistry;
use crate::error::{EcsError, Result};
use std::collections::HashSet;
use crate::systems::System;
use std::any::TypeId;
use log::debug;

pub(crate) struct SystemStore {
	state: State,
	set: HashSet<TypeId>,
	systems: Vec<Box<dyn System>>,
}

#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
enum State {
	#[default]
	Uninitialized,
	Initializing,
	Initialized,
}

impl SystemStore {
	pub fn new() -> Self {
		Self {
			set: HashSet::default(),
			state: State::default(),
			systems: Vec::default(),
		}
	}

	pub fn add_system<T: System>(&mut self, system: T) -> Result<()> {
		match self.state {
			State::Uninitialized => {
				let name = std::any::type_name::<T>();
				if !self.set.insert(TypeId::of::<T>()) {
					return Err(EcsError::SystemAlreadyRegistered(name));
				}

				debug!("Registered system {}", name);
				self.systems.push(Box::new(system));
				Ok(())
			},
			State::Initializing => Err(EcsError::SystemsInitializing),
			State::Initialized => Err(EcsError::SystemsAlreadyInitialized),
		}
	}

	pub fn setup_systems(&mut self, registry: &mut EntityRegistry) -> Result<()> {
		match self.state {
			State::Uninitialized => {
				self.state = State::Initializing;
				self.systems.iter_mut().for_each(|s| s.setup(registry));
				self.state = State::Initialized;

				debug!("Initialized {} systems", self.systems.len());
				Ok(())
			},
			State::Initializing => Err(EcsError::SystemsInitializing),
			State::Initialized => Err(EcsError::SystemsAlreadyInitialized),
		}
	}

	pub fn run_systems(&mut self, registry: &mut EntityRegistry) -> Result<()> {
		match self.state {
			State::Uninitialized | State::Initializing => Err(EcsError::SystemsNotInitialized),
			State::Initialized => {
				self.systems.iter_mut().for_each(|s| s.run(registry));
				Ok(())
			},
		}
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}
}
