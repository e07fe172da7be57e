//! Runtime descriptors for the alias table.
//!
//! Object dictionary files name field types with strings such as
//! `UNSIGNED24` or `VISIBLE_STRING`. [`DataType`] is the runtime counterpart
//! of the aliases in this crate and [`Primitive`] links each alias to it at
//! compile time.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::*;

/// One entry of the alias table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataType {
	Boolean,
	Int8,
	Int16,
	Int24,
	Int32,
	Int40,
	Int48,
	Int56,
	Int64,
	UInt8,
	UInt16,
	UInt24,
	UInt32,
	UInt40,
	UInt48,
	UInt56,
	UInt64,
	Real32,
	Real64,
	VisibleString,
	OctetString,
	Unknown,
}

impl DataType {
	/// Every entry of the alias table.
	pub const ALL: [Self; 22] = [
		Self::Boolean,
		Self::Int8,
		Self::Int16,
		Self::Int24,
		Self::Int32,
		Self::Int40,
		Self::Int48,
		Self::Int56,
		Self::Int64,
		Self::UInt8,
		Self::UInt16,
		Self::UInt24,
		Self::UInt32,
		Self::UInt40,
		Self::UInt48,
		Self::UInt56,
		Self::UInt64,
		Self::Real32,
		Self::Real64,
		Self::VisibleString,
		Self::OctetString,
		Self::Unknown,
	];

	/// Looks up the integer type of the given width and signedness. Widths
	/// are 8 to 64 in steps of 8.
	pub const fn integer(bits: u32, signed: bool) -> Option<Self> {
		let data_type = match (bits, signed) {
			(8, true) => Self::Int8,
			(16, true) => Self::Int16,
			(24, true) => Self::Int24,
			(32, true) => Self::Int32,
			(40, true) => Self::Int40,
			(48, true) => Self::Int48,
			(56, true) => Self::Int56,
			(64, true) => Self::Int64,
			(8, false) => Self::UInt8,
			(16, false) => Self::UInt16,
			(24, false) => Self::UInt24,
			(32, false) => Self::UInt32,
			(40, false) => Self::UInt40,
			(48, false) => Self::UInt48,
			(56, false) => Self::UInt56,
			(64, false) => Self::UInt64,
			_ => return None,
		};

		Some(data_type)
	}

	/// Canonical object dictionary name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Boolean => "BOOLEAN",
			Self::Int8 => "INTEGER8",
			Self::Int16 => "INTEGER16",
			Self::Int24 => "INTEGER24",
			Self::Int32 => "INTEGER32",
			Self::Int40 => "INTEGER40",
			Self::Int48 => "INTEGER48",
			Self::Int56 => "INTEGER56",
			Self::Int64 => "INTEGER64",
			Self::UInt8 => "UNSIGNED8",
			Self::UInt16 => "UNSIGNED16",
			Self::UInt24 => "UNSIGNED24",
			Self::UInt32 => "UNSIGNED32",
			Self::UInt40 => "UNSIGNED40",
			Self::UInt48 => "UNSIGNED48",
			Self::UInt56 => "UNSIGNED56",
			Self::UInt64 => "UNSIGNED64",
			Self::Real32 => "REAL32",
			Self::Real64 => "REAL64",
			Self::VisibleString => "VISIBLE_STRING",
			Self::OctetString => "OCTET_STRING",
			Self::Unknown => "UNKNOWN",
		}
	}

	/// Declared width in bits. `BOOLEAN` is a single bit. Variable-length
	/// types and `UNKNOWN` have no width.
	pub const fn bits(self) -> Option<u32> {
		let bits = match self {
			Self::Boolean => 1,
			Self::Int8 | Self::UInt8 => 8,
			Self::Int16 | Self::UInt16 => 16,
			Self::Int24 | Self::UInt24 => 24,
			Self::Int32 | Self::UInt32 | Self::Real32 => 32,
			Self::Int40 | Self::UInt40 => 40,
			Self::Int48 | Self::UInt48 => 48,
			Self::Int56 | Self::UInt56 => 56,
			Self::Int64 | Self::UInt64 | Self::Real64 => 64,
			Self::VisibleString | Self::OctetString | Self::Unknown => return None,
		};

		Some(bits)
	}

	/// Width of the native type holding a value of this type in memory.
	pub const fn container_bits(self) -> Option<u32> {
		match self {
			Self::Boolean => Some(8),
			Self::Int24 | Self::UInt24 => Some(32),
			Self::Int40 | Self::Int48 | Self::Int56 | Self::UInt40 | Self::UInt48 | Self::UInt56 => {
				Some(64)
			}
			_ => self.bits(),
		}
	}

	/// Signed integers and reals.
	pub const fn is_signed(self) -> bool {
		matches!(
			self,
			Self::Int8
				| Self::Int16
				| Self::Int24
				| Self::Int32
				| Self::Int40
				| Self::Int48
				| Self::Int56
				| Self::Int64
				| Self::Real32
				| Self::Real64
		)
	}

	pub const fn is_integer(self) -> bool {
		!matches!(
			self,
			Self::Boolean
				| Self::Real32
				| Self::Real64
				| Self::VisibleString
				| Self::OctetString
				| Self::Unknown
		)
	}

	/// Integers whose width has no native Rust type.
	pub const fn is_odd_width(self) -> bool {
		matches!(
			self,
			Self::Int24
				| Self::Int40
				| Self::Int48
				| Self::Int56
				| Self::UInt24
				| Self::UInt40
				| Self::UInt48
				| Self::UInt56
		)
	}

	pub const fn is_variable_length(self) -> bool {
		matches!(self, Self::VisibleString | Self::OctetString)
	}
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for DataType {
	type Err = DataTypeError;

	/// Parses a canonical name, ignoring case and surrounding whitespace.
	///
	/// String types may carry a trailing default length (`VISIBLE_STRING10`)
	/// which is accepted and dropped. `DOMAIN` resolves to
	/// [`DataType::OctetString`].
	fn from_str(s: &str) -> Result<Self> {
		let name = s.trim().to_ascii_uppercase();
		let split = name
			.find(|c: char| c.is_ascii_digit())
			.unwrap_or(name.len());
		let (kind, digits) = name.split_at(split);

		let width = if digits.is_empty() {
			None
		} else {
			let bits = digits
				.parse::<u32>()
				.map_err(|_| DataTypeError::InvalidName(s.to_string()))?;
			Some(bits)
		};

		let data_type = match (kind, width) {
			("BOOLEAN", None) => Self::Boolean,
			("INTEGER", Some(bits)) => {
				Self::integer(bits, true).ok_or(DataTypeError::UnsupportedWidth {
					kind: "INTEGER",
					bits,
				})?
			}
			("UNSIGNED", Some(bits)) => {
				Self::integer(bits, false).ok_or(DataTypeError::UnsupportedWidth {
					kind: "UNSIGNED",
					bits,
				})?
			}
			("REAL", Some(32)) => Self::Real32,
			("REAL", Some(64)) => Self::Real64,
			("REAL", Some(bits)) => {
				return Err(DataTypeError::UnsupportedWidth { kind: "REAL", bits });
			}
			("VISIBLE_STRING", _) => Self::VisibleString,
			("OCTET_STRING", _) | ("DOMAIN", None) => Self::OctetString,
			("UNKNOWN", None) => Self::Unknown,
			_ => return Err(DataTypeError::InvalidName(s.to_string())),
		};

		trace!("resolved data type `{}` as {}", s, data_type);

		Ok(data_type)
	}
}

/// A type of the alias table.
pub trait Primitive {
	const DATA_TYPE: DataType;
}

macro_rules! impl_primitive {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Primitive for $ty {
				const DATA_TYPE: DataType = DataType::$variant;
			}
		)*
	};
}

impl_primitive!(
	Boolean => Boolean,
	Int8 => Int8,
	Int16 => Int16,
	Int24 => Int24,
	Int32 => Int32,
	Int40 => Int40,
	Int48 => Int48,
	Int56 => Int56,
	Int64 => Int64,
	UInt8 => UInt8,
	UInt16 => UInt16,
	UInt24 => UInt24,
	UInt32 => UInt32,
	UInt40 => UInt40,
	UInt48 => UInt48,
	UInt56 => UInt56,
	UInt64 => UInt64,
	Real32 => Real32,
	Real64 => Real64,
	VisibleString => VisibleString,
	OctetString => OctetString,
	Unknown => Unknown,
);

impl<T: Primitive> Primitive for Value<T> {
	const DATA_TYPE: DataType = T::DATA_TYPE;
}
