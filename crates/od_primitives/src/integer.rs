//! Integers with widths between the native power-of-two sizes.
//!
//! Object dictionaries declare fields of 24, 40, 48 and 56 bits. Rust has no
//! native integer of those widths, so [`Integer`] gives each of them a
//! distinct type backed by the smallest native container able to hold it:
//! 24-bit values live in a 32-bit container and 40, 48 and 56-bit values in a
//! 64-bit one.
//!
//! The declared width is never enforced. Values are stored verbatim and the
//! code that encodes them against a wire format is responsible for keeping
//! them in range.

use core::fmt;
use core::hash::Hash;

mod private {
	pub trait Sealed {}
}

/// Zero-sized selector naming one `(BITS, SIGNED)` parameterization.
///
/// [`Storage`] is implemented for exactly the supported selectors, which is
/// what limits [`Integer`] to widths 24, 40, 48 and 56.
#[derive(Clone, Copy, Debug)]
pub struct Bits<const BITS: u8, const SIGNED: bool>;

/// Backing container of an odd-width integer.
///
/// This trait is sealed. Naming an [`Integer`] whose width has no
/// implementation is a compile error.
pub trait Storage: private::Sealed {
	/// The native integer holding the value.
	type Value: Copy
		+ Default
		+ Eq
		+ Ord
		+ Hash
		+ fmt::Debug
		+ fmt::Display
		+ fmt::LowerHex
		+ fmt::UpperHex;

	/// Zero in the backing container.
	const ZERO: Self::Value;

	/// Name of the alias for this parameterization, used by `Debug`.
	const NAME: &'static str;
}

/// Backing container of `Integer<BITS, SIGNED>`.
pub type Container<const BITS: u8, const SIGNED: bool> = <Bits<BITS, SIGNED> as Storage>::Value;

/// A fixed-width integer of `BITS` bits.
///
/// The value is held in [`Container<BITS, SIGNED>`] without masking, so a
/// value wider than `BITS` round-trips unchanged and takes part in
/// comparisons and text rendering at full container width. Equality and
/// ordering follow the stored value. Width and signedness are part of the
/// type, so integers of different parameterizations never compare.
///
/// Text rendering is lowercase hex with a `0x` prefix and no padding.
/// Negative values print the two's-complement bit pattern of the container
/// rather than a minus sign, which keeps the raw wire bits visible.
///
/// ```
/// use od_primitives::Int40;
/// use od_primitives::UInt24;
///
/// assert_eq!(Int40::new(-1).to_string(), "0xffffffffffffffff");
/// assert_eq!(UInt24::new(0xab_cdef).to_string(), "0xabcdef");
/// assert_eq!(UInt24::default().to_string(), "0x0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Integer<const BITS: u8, const SIGNED: bool>
where
	Bits<BITS, SIGNED>: Storage,
{
	value: Container<BITS, SIGNED>,
}

impl<const W: u8, const S: bool> Integer<W, S>
where
	Bits<W, S>: Storage,
{
	/// Declared width in bits.
	pub const BITS: u32 = W as u32;
	/// Whether the backing container is signed.
	pub const SIGNED: bool = S;
	pub const ZERO: Self = Self::new(<Bits<W, S> as Storage>::ZERO);

	/// Stores `value` as-is. No range check against [`Self::BITS`] is made.
	#[inline]
	pub const fn new(value: Container<W, S>) -> Self {
		Self { value }
	}

	#[inline]
	pub const fn get(&self) -> Container<W, S> {
		self.value
	}

	/// Overwrites the stored value. No range check is made.
	#[inline]
	pub fn set(&mut self, value: Container<W, S>) {
		self.value = value;
	}

	/// Direct access to the backing storage.
	#[inline]
	pub const fn data(&self) -> &Container<W, S> {
		&self.value
	}

	#[inline]
	pub fn data_mut(&mut self) -> &mut Container<W, S> {
		&mut self.value
	}
}

impl<const W: u8, const S: bool> Default for Integer<W, S>
where
	Bits<W, S>: Storage,
{
	fn default() -> Self {
		Self::ZERO
	}
}

impl<const W: u8, const S: bool> fmt::Display for Integer<W, S>
where
	Bits<W, S>: Storage,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}", self.value)
	}
}

impl<const W: u8, const S: bool> fmt::Debug for Integer<W, S>
where
	Bits<W, S>: Storage,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({:#x})", <Bits<W, S> as Storage>::NAME, self.value)
	}
}

impl<const W: u8, const S: bool> fmt::LowerHex for Integer<W, S>
where
	Bits<W, S>: Storage,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(&self.value, f)
	}
}

impl<const W: u8, const S: bool> fmt::UpperHex for Integer<W, S>
where
	Bits<W, S>: Storage,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::UpperHex::fmt(&self.value, f)
	}
}

/// Registers a supported `(BITS, SIGNED)` parameterization and generates the
/// conversions between it and its container.
///
/// For `($name, $bits, $signed, $repr)` this generates:
/// - `Storage for Bits<$bits, $signed>` with `Value = $repr`
/// - `From<$repr> for Integer<$bits, $signed>`
/// - `From<Integer<$bits, $signed>> for $repr`
macro_rules! impl_storage {
	($name:literal, $bits:literal, $signed:literal, $repr:ty) => {
		impl private::Sealed for Bits<$bits, $signed> {}

		impl Storage for Bits<$bits, $signed> {
			type Value = $repr;

			const NAME: &'static str = $name;
			const ZERO: $repr = 0;
		}

		impl From<$repr> for Integer<$bits, $signed> {
			fn from(value: $repr) -> Self {
				Self::new(value)
			}
		}

		impl From<Integer<$bits, $signed>> for $repr {
			fn from(value: Integer<$bits, $signed>) -> Self {
				value.get()
			}
		}
	};
}

impl_storage!("Int24", 24, true, i32);
impl_storage!("Int40", 40, true, i64);
impl_storage!("Int48", 48, true, i64);
impl_storage!("Int56", 56, true, i64);
impl_storage!("UInt24", 24, false, u32);
impl_storage!("UInt40", 40, false, u64);
impl_storage!("UInt48", 48, false, u64);
impl_storage!("UInt56", 56, false, u64);
