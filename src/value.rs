//! Values exchanged with the configuration-language layer.
//!
//! The evaluator hands records in and out as loosely typed [`Value`]s. Decoders in
//! this crate accept either a native record or a generic [`Struct`] with the expected
//! fields, and report shape problems as a [`DecodeError`] naming the field and the
//! actual and expected types.

use std::collections::BTreeMap ;

use crate::{ Artifact, Depset, Info, PluginData };
pub use crate::decode_error::DecodeError ;



/// A value as seen by the configuration-language layer.
#[derive( Debug, Clone )]
pub enum Value {
	None,
	Bool( bool ),
	Int( i64 ),
	String( String ),
	/// A single file.
	Artifact( Artifact ),
	List( Vec<Value> ),
	/// A depset of strings, sharing structure with the native set it wraps.
	StringSet( Depset<String> ),
	/// A depset of files, sharing structure with the native set it wraps.
	ArtifactSet( Depset<Artifact> ),
	/// A generic record of named fields.
	Struct( Struct ),
	/// A native plugin data record.
	PluginData( PluginData ),
	/// A provider instance.
	Info( Info ),
}

impl Value {

	/// The type name used in error messages.
	pub fn type_name( &self ) -> &str {
		match self {
			Self::None => "NoneType",
			Self::Bool( _ ) => "bool",
			Self::Int( _ ) => "int",
			Self::String( _ ) => "string",
			Self::Artifact( _ ) => "File",
			Self::List( _ ) => "list",
			Self::StringSet( _ ) | Self::ArtifactSet( _ ) => "depset",
			Self::Struct( _ ) => "struct",
			Self::PluginData( _ ) => "PluginData",
			Self::Info( info ) => info.type_name(),
		}
	}

	/// Like [`type_name`]( Self::type_name ) but spells out the element type of depsets.
	pub fn describe( &self ) -> String {
		match self {
			Self::StringSet( _ ) => "depset of 'string'".to_string(),
			Self::ArtifactSet( _ ) => "depset of 'File'".to_string(),
			other => other.type_name().to_string(),
		}
	}

	/// Reads a struct.
	///
	/// # Errors
	/// Returns [`DecodeError::WrongType`] for anything else.
	pub fn as_struct( &self, what: &str ) -> Result<&Struct, DecodeError> {
		match self {
			Self::Struct( fields ) => Ok( fields ),
			other => Err( DecodeError::wrong_type( what, other, "struct" )),
		}
	}

	/// Reads a list.
	///
	/// # Errors
	/// Returns [`DecodeError::WrongType`] for anything else.
	pub fn as_list( &self, what: &str ) -> Result<&[Value], DecodeError> {
		match self {
			Self::List( items ) => Ok( items ),
			other => Err( DecodeError::wrong_type( what, other, "list" )),
		}
	}

	/// Reads a single file.
	///
	/// # Errors
	/// Returns [`DecodeError::WrongType`] for anything else.
	pub fn as_artifact( &self, what: &str ) -> Result<&Artifact, DecodeError> {
		match self {
			Self::Artifact( artifact ) => Ok( artifact ),
			other => Err( DecodeError::wrong_type( what, other, "File" )),
		}
	}

	/// Reads a file or `None`.
	///
	/// # Errors
	/// Returns [`DecodeError::WrongType`] for anything else.
	pub fn as_optional_artifact( &self, what: &str ) -> Result<Option<&Artifact>, DecodeError> {
		match self {
			Self::None => Ok( None ),
			Self::Artifact( artifact ) => Ok( Some( artifact )),
			other => Err( DecodeError::wrong_type( what, other, "File or None" )),
		}
	}

	/// Reads a depset of strings.
	///
	/// An empty depset of files is accepted too, since an empty set carries no
	/// elements of the wrong type.
	///
	/// # Errors
	/// Returns [`DecodeError::WrongType`] for anything else.
	pub fn as_string_set( &self, what: &str ) -> Result<Depset<String>, DecodeError> {
		match self {
			Self::StringSet( set ) => Ok( set.clone() ),
			Self::ArtifactSet( set ) if set.is_empty() => Ok( Depset::empty( set.order() )),
			other => Err( DecodeError::wrong_type( what, other, "depset of 'string'" )),
		}
	}

	/// Reads a depset of files.
	///
	/// An empty depset of strings is accepted too.
	///
	/// # Errors
	/// Returns [`DecodeError::WrongType`] for anything else.
	pub fn as_artifact_set( &self, what: &str ) -> Result<Depset<Artifact>, DecodeError> {
		match self {
			Self::ArtifactSet( set ) => Ok( set.clone() ),
			Self::StringSet( set ) if set.is_empty() => Ok( Depset::empty( set.order() )),
			other => Err( DecodeError::wrong_type( what, other, "depset of 'File'" )),
		}
	}

}

impl From<Depset<String>> for Value {
	fn from( set: Depset<String> ) -> Self { Self::StringSet( set ) }
}

impl From<Depset<Artifact>> for Value {
	fn from( set: Depset<Artifact> ) -> Self { Self::ArtifactSet( set ) }
}

impl From<Struct> for Value {
	fn from( fields: Struct ) -> Self { Self::Struct( fields ) }
}



/// A generic record of named fields, as created by user-level rule definitions.
#[derive( Debug, Clone, Default )]
pub struct Struct {
	fields: BTreeMap<String, Value>,
}

impl Struct {

	/// Creates a struct from `( name, value )` pairs. Later duplicates win.
	pub fn new<Name: Into<String>>( fields: impl IntoIterator<Item = ( Name, Value )> ) -> Self {
		Self { fields: fields.into_iter().map(|( name, value )| ( name.into(), value )).collect() }
	}

	/// Adds or replaces a field.
	pub fn with_field( mut self, name: impl Into<String>, value: impl Into<Value> ) -> Self {
		self.fields.insert( name.into(), value.into() );
		self
	}

	/// Returns the field, if present.
	pub fn get( &self, name: &str ) -> Option<&Value> { self.fields.get( name ) }

	/// Returns the field.
	///
	/// # Errors
	/// Returns [`DecodeError::MissingField`] if the struct has no such field.
	pub fn field( &self, name: &str ) -> Result<&Value, DecodeError> {
		self.fields.get( name ).ok_or_else(|| DecodeError::MissingField { field: name.to_string() })
	}

	/// Field names in sorted order.
	pub fn field_names( &self ) -> impl Iterator<Item = &str> {
		self.fields.keys().map( String::as_str )
	}

}
