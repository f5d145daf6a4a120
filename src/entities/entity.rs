use std::fmt;

/// A unique handle to an `Entity`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) id: u32,
}

impl Entity {
	#[inline(always)]
	pub const fn id(&self) -> u32 {
		self.id
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Entity({})", self.id)
	}
}
