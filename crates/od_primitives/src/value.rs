//! A uniform value box for object dictionary fields.

use core::borrow::Borrow;
use core::borrow::BorrowMut;
use core::fmt;
use core::mem;

use bytemuck::TransparentWrapper;

/// Holds exactly one payload of type `T`.
///
/// The wrapper adds no state of its own. Equality, ordering and hashing are
/// those of `T`, so two wrappers compare equal whenever their payloads do,
/// however each one was built.
///
/// Instead of implicit conversions the payload is reached through explicit
/// accessors ([`value`](Self::value), [`value_mut`](Self::value_mut),
/// [`into_inner`](Self::into_inner)) and the standard [`AsRef`], [`AsMut`]
/// and [`Borrow`] traits, which lets a `&Value<T>` be passed wherever a
/// generic `impl AsRef<T>` or `impl Borrow<T>` is accepted. Because the
/// layout is transparent, a `&T` can also be viewed as a `&Value<T>` for
/// free through [`TransparentWrapper::wrap_ref`].
///
/// `Value<Unknown>` is zero-sized and all of its instances are equal.
///
/// ```
/// use od_primitives::UInt40;
/// use od_primitives::Value;
///
/// let mut field = Value::new(UInt40::new(0x10));
/// field.set_value(UInt40::new(0x20));
/// assert_eq!(field.value().get(), 0x20);
/// assert_eq!(field, Value::from(UInt40::new(0x20)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct Value<T>(T);

impl<T> Value<T> {
	#[inline]
	pub const fn new(value: T) -> Self {
		Self(value)
	}

	/// Reference to the payload.
	#[inline]
	pub const fn value(&self) -> &T {
		&self.0
	}

	/// Mutable reference to the payload.
	#[inline]
	pub fn value_mut(&mut self) -> &mut T {
		&mut self.0
	}

	/// Copy of the payload.
	#[inline]
	pub fn get_value(&self) -> T
	where
		T: Clone,
	{
		self.0.clone()
	}

	/// Replaces the payload, dropping the previous one.
	#[inline]
	pub fn set_value(&mut self, value: T) {
		self.0 = value;
	}

	/// Replaces the payload and returns the previous one.
	#[inline]
	pub fn replace(&mut self, value: T) -> T {
		mem::replace(&mut self.0, value)
	}

	#[inline]
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> From<T> for Value<T> {
	fn from(value: T) -> Self {
		Self(value)
	}
}

impl<T> AsRef<T> for Value<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

impl<T> AsMut<T> for Value<T> {
	fn as_mut(&mut self) -> &mut T {
		&mut self.0
	}
}

impl<T> Borrow<T> for Value<T> {
	fn borrow(&self) -> &T {
		&self.0
	}
}

impl<T> BorrowMut<T> for Value<T> {
	fn borrow_mut(&mut self) -> &mut T {
		&mut self.0
	}
}

impl<T: fmt::Display> fmt::Display for Value<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::String;
	use alloc::string::ToString;
	use alloc::vec;
	use core::mem::size_of;

	use super::*;
	use crate::Int24;
	use crate::OctetString;
	use crate::Unknown;

	#[test]
	fn default_value_initializes_payload() {
		assert_eq!(Value::<u16>::default().into_inner(), 0);
		assert_eq!(Value::<Int24>::default().get_value(), Int24::ZERO);
		assert!(Value::<String>::default().value().is_empty());
	}

	#[test]
	fn replace_returns_previous_payload() {
		let mut bytes: Value<OctetString> = vec![1, 2, 3].into();
		let previous = bytes.replace(vec![9]);
		assert_eq!(previous, vec![1, 2, 3]);
		assert_eq!(bytes.value(), &vec![9]);
	}

	#[test]
	fn value_mut_edits_in_place() {
		let mut text = Value::new(String::from("node"));
		text.value_mut().push_str("-1");
		assert_eq!(text.value(), "node-1");
	}

	#[test]
	fn display_delegates_to_payload() {
		assert_eq!(Value::new(Int24::new(-1)).to_string(), "0xffffffff");
		assert_eq!(Value::new(12u8).to_string(), "12");
	}

	#[test]
	fn wrap_ref_views_payload_as_value() {
		let raw = 5u32;
		let wrapped: &Value<u32> = Value::wrap_ref(&raw);
		assert_eq!(wrapped, &Value::new(5));
	}

	#[test]
	fn unknown_value_is_empty_marker() {
		assert_eq!(size_of::<Value<Unknown>>(), 0);
		assert_eq!(Value::new(Unknown), Value::<Unknown>::default());
	}
}
