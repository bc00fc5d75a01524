use itertools::Itertools ;
use thiserror::Error ;

use crate::Order ;
use crate::value::Value ;



/// Errors raised while decoding a boundary value into a typed record.
///
/// These are user-facing: the evaluator reports them as rule errors, so the
/// messages name the field that was wrong.
#[derive( Debug, Error, Clone, Eq, PartialEq )]
pub enum DecodeError {
	/// A required field is absent from a struct.
	#[error( "Missing field: {field}" )]
	MissingField { field: String },
	/// A field holds a value of the wrong type.
	#[error( "for {field}, got {actual}, want {expected}" )]
	WrongType { field: String, actual: String, expected: String },
	/// An order name that no [`Order`] answers to.
	#[error( "Invalid order: {name} (want one of {})", order_names() )]
	UnknownOrder { name: String },
}

impl DecodeError {
	pub(crate) fn wrong_type( field: &str, actual: &Value, expected: &str ) -> Self {
		Self::WrongType { field: field.to_string(), actual: actual.describe(), expected: expected.to_string() }
	}
}

fn order_names() -> String {
	Order::ALL.iter().map(| order | order.name() ).join( ", " )
}
