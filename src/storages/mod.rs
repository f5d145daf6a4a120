//! Every [component](crate::components::Component) type gets its own dense storage
//! inside an [EntityRegistry](crate::entities::EntityRegistry).
//!
//! Values of one type are packed together in insertion order and compacted on removal,
//! while an index map keeps track of which slot belongs to which [entity](crate::entities::Entity).

mod storage_macros;
mod storage_store;
mod component_storage;

pub use storage_macros::*;
pub use component_storage::*;

pub(crate) use storage_store::*;
