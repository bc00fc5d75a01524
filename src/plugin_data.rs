//! Processor metadata for one or more annotation processors.
//!
//! A [`PluginData`] bundles the processor class names to run, the classpath they run
//! with, and the data files they read. Records are aggregated along the dependency
//! graph with [`PluginData::merge`], which nests the fields of its inputs instead of
//! copying them.

use std::sync::Arc ;
use once_cell::sync::Lazy ;
use pipe_trait::Pipe ;

use crate::{ Artifact, Depset, Order };
use crate::decode_error::DecodeError ;
use crate::depset::ModeConflict ;
use crate::value::{ Struct, Value };
use crate::wrap_error::WrapError ;



static EMPTY: Lazy<PluginData> = Lazy::new(|| PluginData( Arc::new( Fields {
	processor_classes: Depset::empty( PluginData::ORDER ),
	processor_classpath: Depset::empty( PluginData::ORDER ),
	processor_data: Depset::empty( PluginData::ORDER ),
})));

struct Fields {
	processor_classes: Depset<String>,
	processor_classpath: Depset<Artifact>,
	processor_data: Depset<Artifact>,
}

/// Processor class names, processor classpath and processor data of a set of plugins.
///
/// Immutable and cheap to clone. There is exactly one empty record: every way of
/// producing a record with three empty fields returns it, so emptiness can also be
/// checked by identity with [`PluginData::ptr_eq`].
///
/// ```
/// use plugin_depset::PluginData ;
///
/// let lombok = PluginData::from_parts([ "lombok.Processor" ], [ "lombok.jar" ], Vec::<&str>::new() );
/// let dagger = PluginData::from_parts([ "dagger.Processor" ], [ "dagger.jar" ], Vec::<&str>::new() );
///
/// let merged = PluginData::merge([ &lombok, &dagger ])?;
/// assert_eq!( merged.processor_classes().to_list(), vec![ "lombok.Processor", "dagger.Processor" ]);
///
/// assert!( PluginData::ptr_eq( &PluginData::merge([])?, &PluginData::empty() ));
/// # Ok::<(), plugin_depset::ModeConflict>(())
/// ```
#[derive( Clone )]
pub struct PluginData( Arc<Fields> );

impl PluginData {

	/// Order of all three fields.
	pub const ORDER: Order = Order::Stable ;

	/// The canonical empty record.
	pub fn empty() -> Self { EMPTY.clone() }

	/// Creates a record, returning the canonical empty record when all three sets are empty.
	pub fn create(
		processor_classes: Depset<String>,
		processor_classpath: Depset<Artifact>,
		processor_data: Depset<Artifact>,
	) -> Self {
		if processor_classes.is_empty() && processor_classpath.is_empty() && processor_data.is_empty() {
			return Self::empty();
		}
		Self( Arc::new( Fields { processor_classes, processor_classpath, processor_data }))
	}

	/// Creates a record holding the given elements directly.
	pub fn from_parts(
		processor_classes: impl IntoIterator<Item = impl Into<String>>,
		processor_classpath: impl IntoIterator<Item = impl Into<Artifact>>,
		processor_data: impl IntoIterator<Item = impl Into<Artifact>>,
	) -> Self {
		Self::create(
			Depset::of( Self::ORDER, processor_classes.into_iter().map( Into::into )),
			Depset::of( Self::ORDER, processor_classpath.into_iter().map( Into::into )),
			Depset::of( Self::ORDER, processor_data.into_iter().map( Into::into )),
		)
	}

	/// Merges records field by field.
	///
	/// The order of `records` decides which occurrence of a duplicate survives, so
	/// pass them in dependency declaration order. Merging no records, or only empty
	/// ones, returns the canonical empty record.
	///
	/// # Errors
	/// Returns [`ModeConflict`] if a record holds a set that is not in [`PluginData::ORDER`].
	pub fn merge<'a>( records: impl IntoIterator<Item = &'a PluginData> ) -> Result<Self, ModeConflict> {
		let mut processor_classes = Depset::builder( Self::ORDER );
		let mut processor_classpath = Depset::builder( Self::ORDER );
		let mut processor_data = Depset::builder( Self::ORDER );
		for record in records {
			processor_classes.add_transitive( record.processor_classes() )?;
			processor_classpath.add_transitive( record.processor_classpath() )?;
			processor_data.add_transitive( record.processor_data() )?;
		}
		Ok( Self::create( processor_classes.build(), processor_classpath.build(), processor_data.build() ))
	}

	/// Decodes a record handed in by the configuration-value layer.
	///
	/// Accepts a native record as is, or a struct with the fields `processor_classes`
	/// (depset of strings), `processor_jars` and `processor_data` (depsets of files).
	/// All three sets must be in [`PluginData::ORDER`].
	///
	/// # Errors
	/// - [`WrapError::Decode`] when a struct lacks one of the fields or holds a value of the
	/// 	wrong type or order.
	/// - [`WrapError::TypeMismatch`] for any other kind of value.
	pub fn wrap( value: &Value ) -> Result<Self, WrapError> {
		let wrapped = match value {
			Value::PluginData( data ) => Ok( data.clone() ),
			Value::Struct( fields ) => Self::decode( fields ),
			other => Err( WrapError::type_mismatch( other.type_name(), "PluginData" )),
		};
		wrapped.inspect_err(| err | tracing::debug!( value = value.type_name(), %err, "rejected plugin data" ))
	}

	fn decode( fields: &Struct ) -> Result<Self, WrapError> {
		Ok( Self::create(
			decode_set( fields, "processor_classes", "depset of 'string'", Value::as_string_set )?,
			decode_set( fields, "processor_jars", "depset of 'File'", Value::as_artifact_set )?,
			decode_set( fields, "processor_data", "depset of 'File'", Value::as_artifact_set )?,
		))
	}

	/// Whether all three sets are empty.
	pub fn is_empty( &self ) -> bool {
		self.0.processor_classes.is_empty()
			&& self.0.processor_classpath.is_empty()
			&& self.0.processor_data.is_empty()
	}

	/// Whether both handles refer to the same record.
	pub fn ptr_eq( left: &Self, right: &Self ) -> bool { Arc::ptr_eq( &left.0, &right.0 ) }

	/// Class names to pass to the compiler to run these processors.
	#[inline] pub fn processor_classes( &self ) -> &Depset<String> { &self.0.processor_classes }

	/// Artifacts to put on the processor path.
	#[inline] pub fn processor_classpath( &self ) -> &Depset<Artifact> { &self.0.processor_classpath }

	#[inline] pub fn processor_data( &self ) -> &Depset<Artifact> { &self.0.processor_data }

	/// `processor_classes` as a boundary depset.
	pub fn processor_classes_value( &self ) -> Value { Value::StringSet( self.0.processor_classes.clone() ) }

	/// `processor_classpath` as a boundary depset, exposed under the name `processor_jars`.
	pub fn processor_jars_value( &self ) -> Value { Value::ArtifactSet( self.0.processor_classpath.clone() ) }

	/// `processor_data` as a boundary depset.
	pub fn processor_data_value( &self ) -> Value { Value::ArtifactSet( self.0.processor_data.clone() ) }

	/// Encodes the record as a generic struct that [`PluginData::wrap`] accepts back.
	pub fn to_struct( &self ) -> Struct {
		Struct::new([
			( "processor_classes", self.processor_classes_value() ),
			( "processor_jars", self.processor_jars_value() ),
			( "processor_data", self.processor_data_value() ),
		])
	}

}

/// Reads a set field. Sets of any order but [`PluginData::ORDER`] are rejected here,
/// where the field can still be named, instead of failing a later merge.
fn decode_set<T>(
	fields: &Struct,
	name: &str,
	expected: &str,
	read: impl FnOnce( &Value, &str ) -> Result<Depset<T>, DecodeError>,
) -> Result<Depset<T>, DecodeError> {
	let value = fields.field( name )?;
	read( value, name )?.pipe(| set | match set.order() == PluginData::ORDER {
		true => Ok( set ),
		false => Err( DecodeError::WrongType {
			field: name.to_string(),
			actual: format!( "{} (order {})", value.describe(), set.order() ),
			expected: format!( "{} (order {})", expected, PluginData::ORDER ),
		}),
	})
}

impl PartialEq for PluginData {
	fn eq( &self, other: &Self ) -> bool {
		Self::ptr_eq( self, other ) || (
			self.0.processor_classes == other.0.processor_classes
			&& self.0.processor_classpath == other.0.processor_classpath
			&& self.0.processor_data == other.0.processor_data
		)
	}
}

impl Eq for PluginData {}

impl std::fmt::Debug for PluginData {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "PluginData" )
			.field( "processor_classes", &self.0.processor_classes )
			.field( "processor_classpath", &self.0.processor_classpath )
			.field( "processor_data", &self.0.processor_data )
			.finish()
	}
}
