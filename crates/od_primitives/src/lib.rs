#![no_std]

//! Primitive field types for object dictionary data models.
//!
//! The crate provides the vocabulary that encoders, decoders and dictionary
//! models build on:
//!
//! - [`Integer`], integers of 24, 40, 48 and 56 bits stored in the smallest
//!   native container that fits;
//! - [`Value`], a transparent box giving every field type the same
//!   construction, access and ordering surface;
//! - the alias table ([`Boolean`], [`Int24`], [`UInt48`], [`Real32`],
//!   [`VisibleString`], [`OctetString`], [`Unknown`], ...), the complete set
//!   of types a field may have;
//! - [`DataType`], the runtime descriptor of that table, parsed from the
//!   canonical names used in object dictionary files.
//!
//! Nothing here validates ranges. An `Int24` holding a value wider than 24
//! bits is kept as-is, and checking it against the wire format is left to
//! the layer that encodes it.

extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "logs")]
macro_rules! trace {
	($($arg:tt)*) => {
		::log::trace!($($arg)*);
	};
}

#[cfg(not(feature = "logs"))]
macro_rules! trace {
	($($arg:tt)*) => {};
}

mod data_type;
mod error;
mod integer;
mod types;
mod value;

pub use bytemuck::TransparentWrapper;

pub use crate::data_type::*;
pub use crate::error::*;
pub use crate::integer::*;
pub use crate::types::*;
pub use crate::value::*;

/// Make sure all traits are available.
pub mod prelude {
	pub use super::Primitive;
	pub use super::Storage;
	pub use super::TransparentWrapper;
}
