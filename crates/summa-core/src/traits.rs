//! Trait re-exports for `traits::X` ergonomics.

pub use crate::container::{MappingContainer, SequenceContainer};
pub use num_traits::{FromPrimitive as NumFromPrimitive, ToPrimitive as NumToPrimitive};
