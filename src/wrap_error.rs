use thiserror::Error ;

use crate::depset::ModeConflict ;
use crate::decode_error::DecodeError ;



/// Errors that can occur when turning a boundary value into a plugin record.
///
/// Every variant is a deterministic function of the input; retrying never helps.
#[derive( Debug, Error, Clone, Eq, PartialEq )]
pub enum WrapError {
	/// The value is a record of another kind altogether.
	#[error( "got element of type {actual}, want {expected}" )]
	TypeMismatch { actual: String, expected: String },
	/// The value is the right kind of record but one of its fields is malformed.
	#[error( "{0}" )]
	Decode( #[from] DecodeError ),
	/// Records carried sets of an order that cannot be merged with the plugin sets.
	#[error( "{0}" )]
	ModeConflict( #[from] ModeConflict ),
}

impl WrapError {
	pub(crate) fn type_mismatch( actual: &str, expected: &str ) -> Self {
		Self::TypeMismatch { actual: actual.to_string(), expected: expected.to_string() }
	}
}
