//! Opaque file identifiers and the compiled outputs of a target.

use std::sync::Arc ;

use crate::value::{ DecodeError, Struct, Value };



/// Opaque identifier of a source or build-produced file.
///
/// Resolving an artifact to an actual file is someone else's job; here it is only
/// compared, hashed and carried around. Cloning is cheap.
#[derive( Clone, Eq, PartialEq, Hash, Ord, PartialOrd )]
pub struct Artifact( Arc<str> );

impl Artifact {
	/// Creates an artifact from its execution path.
	pub fn new( exec_path: impl Into<Arc<str>> ) -> Self { Self( exec_path.into() ) }

	/// The execution path this artifact was created with.
	#[inline] pub fn exec_path( &self ) -> &str { &self.0 }
}

impl std::fmt::Debug for Artifact {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		write!( f, "<File {}>", self.0 )
	}
}

impl std::fmt::Display for Artifact {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result { f.write_str( &self.0 ) }
}

impl From<&str> for Artifact {
	fn from( exec_path: &str ) -> Self { Self::new( exec_path ) }
}

impl From<String> for Artifact {
	fn from( exec_path: String ) -> Self { Self::new( exec_path ) }
}



/// The compiled outputs of a single target.
///
/// Carried by a [`PluginInfo`]( crate::PluginInfo ) for the target that produced
/// them, but never propagated to dependants through a merge.
#[derive( Debug, Clone, Eq, PartialEq, Hash )]
pub struct BuildOutput {
	class_jar: Artifact,
	compile_jar: Option<Artifact>,
	source_jars: Vec<Artifact>,
}

impl BuildOutput {

	/// Creates an output with just a class jar.
	pub fn new( class_jar: impl Into<Artifact> ) -> Self {
		Self { class_jar: class_jar.into(), compile_jar: None, source_jars: Vec::new() }
	}

	/// Sets the interface jar dependants compile against.
	pub fn with_compile_jar( mut self, compile_jar: impl Into<Artifact> ) -> Self {
		self.compile_jar = Some( compile_jar.into() );
		self
	}

	/// Sets the source jars the output was compiled from.
	pub fn with_source_jars( mut self, source_jars: impl IntoIterator<Item = impl Into<Artifact>> ) -> Self {
		self.source_jars = source_jars.into_iter().map( Into::into ).collect();
		self
	}

	#[inline] pub fn class_jar( &self ) -> &Artifact { &self.class_jar }
	#[inline] pub fn compile_jar( &self ) -> Option<&Artifact> { self.compile_jar.as_ref() }
	#[inline] pub fn source_jars( &self ) -> &[Artifact] { &self.source_jars }

	/// Decodes one output from its boundary representation.
	///
	/// `class_jar` is required. `compile_jar` may be absent or `None`, and a missing
	/// `source_jars` list means no source jars.
	///
	/// # Errors
	/// Returns a [`DecodeError`] naming the first field of the wrong shape.
	pub fn decode( value: &Value ) -> Result<Self, DecodeError> {
		let fields = value.as_struct( "java_outputs" )?;
		Ok( Self {
			class_jar: fields.field( "class_jar" )?.as_artifact( "class_jar" )?.clone(),
			compile_jar: match fields.get( "compile_jar" ) {
				None => None,
				Some( value ) => value.as_optional_artifact( "compile_jar" )?.cloned(),
			},
			source_jars: match fields.get( "source_jars" ) {
				None => Vec::new(),
				Some( value ) => value.as_list( "source_jars" )?
					.iter()
					.map(| jar | jar.as_artifact( "source_jars" ).cloned())
					.collect::<Result<_, _>>()?,
			},
		})
	}

	/// Decodes a list of outputs, as found in the `java_outputs` field of a plugin record.
	///
	/// # Errors
	/// Fails on the first element that is not a well-formed output.
	pub fn decode_list( value: &Value ) -> Result<Vec<Self>, DecodeError> {
		value.as_list( "java_outputs" )?.iter().map( Self::decode ).collect()
	}

	/// Encodes this output for the configuration-value layer.
	pub fn to_value( &self ) -> Value {
		Value::Struct( Struct::new([
			( "class_jar", Value::Artifact( self.class_jar.clone() )),
			( "compile_jar", self.compile_jar.clone().map_or( Value::None, Value::Artifact )),
			( "source_jars", Value::List( self.source_jars.iter().cloned().map( Value::Artifact ).collect() )),
		]))
	}

}
