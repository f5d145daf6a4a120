mod component_id;
mod component_set;
mod component_type;

pub use component_id::*;
pub use component_set::*;
pub use component_type::*;
pub use dense_ecs_derive::Component;
