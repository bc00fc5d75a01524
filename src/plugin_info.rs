//! The plugin provider attached to every build target.
//!
//! A [`PluginInfo`] tells dependants which annotation processors apply to them. Targets
//! collect the records of their direct dependencies, merge them with
//! [`PluginInfo::merge`], and pass the result further up the graph. Build outputs are
//! the one part of a record that never travels: a merged record describes what the
//! dependencies contribute, not what any target compiled.

use std::collections::HashSet ;
use std::sync::Arc ;
use once_cell::sync::Lazy ;

use crate::{ BuildOutput, PluginData };
use crate::depset::ModeConflict ;
use crate::provider::{ Info, Provenance, ProviderKey };
use crate::value::{ Struct, Value };
use crate::wrap_error::WrapError ;



/// Canonical empty records, indexed by the provenance flag.
static EMPTY: Lazy<[PluginInfo; 2]> = Lazy::new(|| [ false, true ].map(| builtin | PluginInfo::from_fields(
	Vec::new(),
	PluginData::empty(),
	PluginData::empty(),
	builtin,
)));

struct Fields {
	build_outputs: Vec<BuildOutput>,
	plugins: PluginData,
	api_generating_plugins: PluginData,
	builtin: bool,
}

/// Plugins that apply to a target and its dependants.
///
/// Holds two [`PluginData`] records: every plugin, and the subset of them that also
/// generate API. The subset relation is maintained by whoever builds the record;
/// [`is_empty`]( Self::is_empty ) and [`has_processors`]( Self::has_processors )
/// rely on it and only look at `plugins`.
///
/// The provenance flag records whether the record comes from the build tool's
/// bundled rules (`builtin`) or from rules defined outside it.
///
/// ```
/// use plugin_depset::{ BuildOutput, PluginData, PluginInfo };
///
/// let processor = PluginData::from_parts([ "auto.value.Processor" ], [ "auto-value.jar" ], Vec::<&str>::new() );
/// let dependency = PluginInfo::new(
/// 	[ BuildOutput::new( "libdep.jar" )],
/// 	processor.clone(),
/// 	PluginData::empty(),
/// 	false,
/// );
///
/// let merged = PluginInfo::merge([ &dependency, &PluginInfo::empty( false )], false )?;
/// assert!( merged.has_processors() );
/// assert!( merged.build_outputs().is_empty() );
/// # Ok::<(), plugin_depset::ModeConflict>(())
/// ```
#[derive( Clone )]
pub struct PluginInfo( Arc<Fields> );

impl PluginInfo {

	/// Name the provider is exported under.
	pub const PROVIDER_NAME: &'static str = "JavaPluginInfo" ;

	/// Creates a record.
	///
	/// `api_generating_plugins` must be a subset of `plugins`. Debug builds assert that
	/// its processor classes are; release builds take it on trust.
	pub fn new(
		build_outputs: impl IntoIterator<Item = BuildOutput>,
		plugins: PluginData,
		api_generating_plugins: PluginData,
		builtin: bool,
	) -> Self {
		debug_assert!(
			is_subset( &api_generating_plugins, &plugins ),
			"api generating plugins must be a subset of plugins",
		);
		Self::from_fields( build_outputs.into_iter().collect(), plugins, api_generating_plugins, builtin )
	}

	fn from_fields(
		build_outputs: Vec<BuildOutput>,
		plugins: PluginData,
		api_generating_plugins: PluginData,
		builtin: bool,
	) -> Self {
		Self( Arc::new( Fields { build_outputs, plugins, api_generating_plugins, builtin }))
	}

	/// The canonical empty record for the given provenance.
	pub fn empty( builtin: bool ) -> Self {
		EMPTY[ usize::from( builtin )].clone()
	}

	/// Merges the plugins of `records`, dropping their build outputs.
	///
	/// The result is builtin only if `builtin` and every record are. Records with
	/// nothing to contribute are skipped; if none is left, the canonical empty record
	/// is returned.
	///
	/// # Errors
	/// Returns [`ModeConflict`] if a record holds sets of an order other than
	/// [`PluginData::ORDER`].
	pub fn merge<'a>(
		records: impl IntoIterator<Item = &'a PluginInfo>,
		builtin: bool,
	) -> Result<Self, ModeConflict> {
		let mut builtin = builtin ;
		let mut plugins = Vec::new();
		let mut api_generating_plugins = Vec::new();
		for record in records {
			if !record.plugins().is_empty() { plugins.push( record.plugins() ) }
			if !record.api_generating_plugins().is_empty() { api_generating_plugins.push( record.api_generating_plugins() ) }
			builtin = builtin && record.is_builtin();
		}
		if plugins.is_empty() && api_generating_plugins.is_empty() {
			return Ok( Self::empty( builtin ));
		}
		Ok( Self::from_fields(
			Vec::new(),
			PluginData::merge( plugins )?,
			PluginData::merge( api_generating_plugins )?,
			builtin,
		))
	}

	/// Merges two records, dropping build outputs.
	///
	/// If either record is empty the other one is returned untouched, build outputs
	/// included, since there is nothing to merge.
	///
	/// # Errors
	/// See [`PluginInfo::merge`].
	pub fn merge_without_build_outputs( a: &Self, b: &Self ) -> Result<Self, ModeConflict> {
		match ( a.is_empty(), b.is_empty() ) {
			( true, _ ) => Ok( b.clone() ),
			( false, true ) => Ok( a.clone() ),
			( false, false ) => Self::merge([ a, b ], a.is_builtin() && b.is_builtin() ),
		}
	}

	/// Extracts the plugin view of a compilation provider.
	///
	/// Reads `plugins` and `api_generating_plugins` from a `JavaInfo` struct; the
	/// provenance comes from which `JavaInfo` identity the struct was exported under.
	/// Build outputs are not carried over.
	///
	/// # Errors
	/// - [`WrapError::TypeMismatch`] if `info` is not a `JavaInfo` struct.
	/// - [`WrapError::Decode`] if either field is malformed.
	pub fn from_java_info( info: &Info ) -> Result<Self, WrapError> {
		Self::plugins_of_java_info( info )
			.inspect_err(| err | tracing::debug!( provider = info.type_name(), %err, "rejected compilation provider" ))
	}

	fn plugins_of_java_info( info: &Info ) -> Result<Self, WrapError> {
		let ( provenance, fields ) = match info {
			Info::Struct { key: ProviderKey::JavaInfo( provenance ), fields } => ( *provenance, fields ),
			other => return Err( WrapError::type_mismatch( other.type_name(), "JavaInfo" )),
		};
		let plugins = PluginData::wrap( fields.field( "plugins" )? )?;
		let api_generating_plugins = PluginData::wrap( fields.field( "api_generating_plugins" )? )?;
		if plugins.is_empty() && api_generating_plugins.is_empty() {
			return Ok( Self::empty( provenance.is_builtin() ));
		}
		Ok( Self::from_fields( Vec::new(), plugins, api_generating_plugins, provenance.is_builtin() ))
	}

	/// Decodes a struct exported under one of the plugin provider identities.
	pub(crate) fn decode( fields: &Struct, provenance: Provenance ) -> Result<Self, WrapError> {
		Ok( Self::from_fields(
			BuildOutput::decode_list( fields.field( "java_outputs" )? )?,
			PluginData::wrap( fields.field( "plugins" )? )?,
			PluginData::wrap( fields.field( "api_generating_plugins" )? )?,
			provenance.is_builtin(),
		))
	}

	/// Whether the record carries no plugins at all.
	pub fn is_empty( &self ) -> bool {
		// api_generating_plugins is a subset of plugins
		self.0.plugins.is_empty()
	}

	/// Whether any annotation processor applies, regardless of classpath or data.
	pub fn has_processors( &self ) -> bool {
		!self.0.plugins.processor_classes().is_empty()
	}

	/// Whether both handles refer to the same record.
	pub fn ptr_eq( left: &Self, right: &Self ) -> bool { Arc::ptr_eq( &left.0, &right.0 ) }

	#[inline] pub fn build_outputs( &self ) -> &[BuildOutput] { &self.0.build_outputs }
	#[inline] pub fn plugins( &self ) -> &PluginData { &self.0.plugins }
	#[inline] pub fn api_generating_plugins( &self ) -> &PluginData { &self.0.api_generating_plugins }
	#[inline] pub fn is_builtin( &self ) -> bool { self.0.builtin }

	/// The provider identity this record is exported under.
	pub fn provider( &self ) -> ProviderKey {
		ProviderKey::PluginInfo( Provenance::from_builtin( self.0.builtin ))
	}

	/// Encodes the record as a generic struct exported under its own identity.
	pub fn to_info( &self ) -> Info {
		Info::Struct {
			key: self.provider(),
			fields: Struct::new([
				( "java_outputs", Value::List( self.0.build_outputs.iter().map( BuildOutput::to_value ).collect() )),
				( "plugins", Value::PluginData( self.0.plugins.clone() )),
				( "api_generating_plugins", Value::PluginData( self.0.api_generating_plugins.clone() )),
			]),
		}
	}

}

fn is_subset( subset: &PluginData, superset: &PluginData ) -> bool {
	let classes = superset.processor_classes().iter().collect::<HashSet<_>>();
	subset.processor_classes().iter().all(| class | classes.contains( class ))
}

impl PartialEq for PluginInfo {
	fn eq( &self, other: &Self ) -> bool {
		Self::ptr_eq( self, other ) || (
			self.0.builtin == other.0.builtin
			&& self.0.build_outputs == other.0.build_outputs
			&& self.0.plugins == other.0.plugins
			&& self.0.api_generating_plugins == other.0.api_generating_plugins
		)
	}
}

impl Eq for PluginInfo {}

impl std::fmt::Debug for PluginInfo {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "PluginInfo" )
			.field( "build_outputs", &self.0.build_outputs )
			.field( "plugins", &self.0.plugins )
			.field( "api_generating_plugins", &self.0.api_generating_plugins )
			.field( "builtin", &self.0.builtin )
			.finish()
	}
}
