use alloc::string::String;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, DataTypeError>;

/// Errors produced when resolving a data type name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DataTypeError {
	#[error("`{0}` isn't a valid data type")]
	InvalidName(String),
	#[error("unsupported width {bits} for `{kind}`")]
	UnsupportedWidth { kind: &'static str, bits: u32 },
}
