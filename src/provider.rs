//! Provider identities and lookup on configured targets.
//!
//! The plugin provider currently exists under two identities: a frozen copy bundled
//! with the build tool ([`Provenance::Builtin`]) and the one defined by the rules
//! themselves ([`Provenance::RulesDefined`]). While both are in use a target may carry
//! either or both, and a lookup has to union them rather than pick one. See
//! [`ProviderSlots`].

use std::collections::HashMap ;

use crate::PluginInfo ;
use crate::depset::ModeConflict ;
use crate::value::{ Struct, Value };
use crate::wrap_error::WrapError ;



/// Where a provider definition comes from.
#[derive( Copy, Clone, Eq, PartialEq, Hash, Debug )]
pub enum Provenance {
	/// Bundled with the build tool.
	Builtin,
	/// Defined by the rule set.
	RulesDefined,
}

impl Provenance {

	/// Maps the provenance flag of a record to a provenance.
	pub const fn from_builtin( builtin: bool ) -> Self {
		match builtin {
			true => Self::Builtin,
			false => Self::RulesDefined,
		}
	}

	#[inline] pub const fn is_builtin( self ) -> bool { matches!( self, Self::Builtin ) }

	/// Label of the file defining providers of this provenance.
	pub const fn label( self ) -> &'static str {
		match self {
			Self::Builtin => "@_builtins//:common/java/java_info.bzl",
			Self::RulesDefined => "@rules_java//java/private:java_info.bzl",
		}
	}

}

/// Identity of a provider, as used to look providers up on a target.
#[derive( Clone, Eq, PartialEq, Hash, Debug )]
pub enum ProviderKey {
	/// The plugin provider.
	PluginInfo( Provenance ),
	/// The compilation provider, which embeds plugin data of its own.
	JavaInfo( Provenance ),
	/// Any other provider, by name.
	Other( String ),
}

impl ProviderKey {

	/// Printable name of the provider.
	pub fn name( &self ) -> &str {
		match self {
			Self::PluginInfo( _ ) => PluginInfo::PROVIDER_NAME,
			Self::JavaInfo( _ ) => "JavaInfo",
			Self::Other( name ) => name,
		}
	}

	/// Label of the defining file, for the providers this crate knows about.
	pub fn label( &self ) -> Option<&'static str> {
		match self {
			Self::PluginInfo( provenance ) | Self::JavaInfo( provenance ) => Some( provenance.label() ),
			Self::Other( _ ) => None,
		}
	}

}

impl std::fmt::Display for ProviderKey {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		match self.label() {
			Some( label ) => write!( f, "{}%{}", label, self.name() ),
			None => f.write_str( self.name() ),
		}
	}
}

/// A provider instance as handed over by the graph evaluator.
#[derive( Debug, Clone )]
pub enum Info {
	/// A native plugin record.
	Plugin( PluginInfo ),
	/// A generic record exported under `key`.
	Struct { key: ProviderKey, fields: Struct },
}

impl Info {

	/// Identity the instance is exported under.
	pub fn key( &self ) -> ProviderKey {
		match self {
			Self::Plugin( info ) => info.provider(),
			Self::Struct { key, .. } => key.clone(),
		}
	}

	/// Type name used in error messages.
	pub fn type_name( &self ) -> &str {
		match self {
			Self::Plugin( _ ) => PluginInfo::PROVIDER_NAME,
			Self::Struct { key, .. } => key.name(),
		}
	}

}

impl From<PluginInfo> for Info {
	fn from( info: PluginInfo ) -> Self { Self::Plugin( info ) }
}



impl PluginInfo {

	/// Turns a provider instance into a plugin record.
	///
	/// Native records pass through unchanged. Structs exported under one of the two
	/// plugin identities are decoded from their `java_outputs`, `plugins` and
	/// `api_generating_plugins` fields and take their provenance from the identity.
	///
	/// # Errors
	/// - [`WrapError::TypeMismatch`] for instances of any other provider.
	/// - [`WrapError::Decode`] if a field is missing or malformed.
	pub fn wrap( info: &Info ) -> Result<Self, WrapError> {
		let wrapped = match info {
			Info::Plugin( plugin ) => Ok( plugin.clone() ),
			Info::Struct { key: ProviderKey::PluginInfo( provenance ), fields } => Self::decode( fields, *provenance ),
			other => Err( WrapError::type_mismatch( other.type_name(), Self::PROVIDER_NAME )),
		};
		wrapped.inspect_err(| err | tracing::debug!( provider = info.type_name(), %err, "rejected plugin provider" ))
	}

	/// Like [`PluginInfo::wrap`], for a value that should hold a provider instance.
	///
	/// # Errors
	/// See [`PluginInfo::wrap`].
	pub fn wrap_value( value: &Value ) -> Result<Self, WrapError> {
		match value {
			Value::Info( info ) => Self::wrap( info ),
			other => Err( WrapError::type_mismatch( other.type_name(), Self::PROVIDER_NAME )),
		}
	}

	/// Looks up the plugin provider of a target under both identities.
	///
	/// # Errors
	/// Fails if either instance cannot be wrapped, or if the two cannot be merged.
	pub fn get( target: &impl TargetProviders ) -> Result<Option<Self>, WrapError> {
		Ok( ProviderSlots::lookup( target )?.resolve()? )
	}

}



/// Read access to the providers of a configured target.
///
/// Implemented by whatever represents analysed targets on the evaluator side.
pub trait TargetProviders {

	/// Label of the target, for diagnostics.
	fn label( &self ) -> &str ;

	/// Returns the instance exported under `key`, if the target has one.
	fn provider( &self, key: &ProviderKey ) -> Option<&Info> ;

}

/// An in-memory target: a label and its providers keyed by identity.
#[derive( Debug, Clone, Default )]
pub struct ProviderMap {
	label: String,
	providers: HashMap<ProviderKey, Info>,
}

impl ProviderMap {

	pub fn new( label: impl Into<String> ) -> Self {
		Self { label: label.into(), providers: HashMap::new() }
	}

	/// Adds a provider under the identity it reports, replacing any previous one.
	pub fn with_provider( mut self, info: impl Into<Info> ) -> Self {
		self.insert( info.into() );
		self
	}

	/// Adds a provider under the identity it reports, returning the one it replaced.
	pub fn insert( &mut self, info: Info ) -> Option<Info> {
		self.providers.insert( info.key(), info )
	}

}

impl TargetProviders for ProviderMap {
	fn label( &self ) -> &str { &self.label }
	fn provider( &self, key: &ProviderKey ) -> Option<&Info> { self.providers.get( key ) }
}

/// The two identities a target may carry the plugin provider under.
#[derive( Debug, Clone, Default )]
pub struct ProviderSlots {
	/// Instance under the rules-defined identity.
	pub current: Option<PluginInfo>,
	/// Instance under the builtin identity.
	pub legacy: Option<PluginInfo>,
}

impl ProviderSlots {

	/// Reads and wraps both slots of `target`.
	///
	/// # Errors
	/// Fails if either instance cannot be wrapped.
	pub fn lookup( target: &impl TargetProviders ) -> Result<Self, WrapError> {
		let slot = | provenance | target
			.provider( &ProviderKey::PluginInfo( provenance ))
			.map( PluginInfo::wrap )
			.transpose();
		let slots = slot( Provenance::RulesDefined ).and_then(| current | Ok( Self {
			current,
			legacy: slot( Provenance::Builtin )?,
		}));
		slots.inspect_err(| err | tracing::debug!( label = target.label(), %err, "plugin provider lookup failed" ))
	}

	/// Collapses the slots into one record.
	///
	/// A single occupied slot is returned as is, with its own provenance. When both
	/// are occupied they are unioned, since during the migration either identity may
	/// carry plugins the other lacks.
	///
	/// # Errors
	/// Returns [`ModeConflict`] if the two records cannot be merged.
	pub fn resolve( self ) -> Result<Option<PluginInfo>, ModeConflict> {
		match ( self.current, self.legacy ) {
			( None, None ) => Ok( None ),
			( Some( info ), None ) | ( None, Some( info )) => Ok( Some( info )),
			( Some( current ), Some( legacy )) => {
				tracing::trace!(
					current_builtin = current.is_builtin(),
					legacy_builtin = legacy.is_builtin(),
					"merging plugin providers of both identities",
				);
				PluginInfo::merge_without_build_outputs( &current, &legacy ).map( Some )
			}
		}
	}

}
