use thiserror::Error;

/// Errors reported by the [EcsContext](crate::context::EcsContext) and its registry.
///
/// Missing entities and components are not errors; lookups return `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
	#[error("Entity identifier space exhausted")]
	EntityIdsExhausted,

	#[error("System `{0}` was already added to the current context")]
	SystemAlreadyRegistered(&'static str),

	#[error("Cannot modify systems during initialization")]
	SystemsInitializing,

	#[error("Systems have already been initialized")]
	SystemsAlreadyInitialized,

	#[error("Systems must be initialized before they can run")]
	SystemsNotInitialized,
}

pub type Result<T> = std::result::Result<T, EcsError>;
