//! The closed vocabulary of object dictionary field types.
//!
//! Downstream code should name fields with these aliases rather than the
//! underlying `Integer<BITS, SIGNED>` instantiations or native types, so the
//! set of permitted field types stays in one place.

use alloc::string::String;
use alloc::vec::Vec;

use crate::Integer;

pub type Boolean = bool;

pub type Int8 = i8;
pub type Int16 = i16;
/// 24-bit signed integer stored in an `i32`.
pub type Int24 = Integer<24, true>;
pub type Int32 = i32;
/// 40-bit signed integer stored in an `i64`.
pub type Int40 = Integer<40, true>;
/// 48-bit signed integer stored in an `i64`.
pub type Int48 = Integer<48, true>;
/// 56-bit signed integer stored in an `i64`.
pub type Int56 = Integer<56, true>;
pub type Int64 = i64;

pub type UInt8 = u8;
pub type UInt16 = u16;
/// 24-bit unsigned integer stored in a `u32`.
pub type UInt24 = Integer<24, false>;
pub type UInt32 = u32;
/// 40-bit unsigned integer stored in a `u64`.
pub type UInt40 = Integer<40, false>;
/// 48-bit unsigned integer stored in a `u64`.
pub type UInt48 = Integer<48, false>;
/// 56-bit unsigned integer stored in a `u64`.
pub type UInt56 = Integer<56, false>;
pub type UInt64 = u64;

/// IEEE 754 single precision.
pub type Real32 = f32;
/// IEEE 754 double precision.
pub type Real64 = f64;

/// Text field.
pub type VisibleString = String;
/// Variable-length raw bytes.
pub type OctetString = Vec<u8>;

/// Marker for a field type that carries no value.
///
/// Zero-sized and stateless: every instance equals every other, so
/// [`Value<Unknown>`](crate::Value) holds nothing either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unknown;
