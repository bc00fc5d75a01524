//! Transitive annotation-processor bookkeeping for build graphs.
//!
//! Every target in a build graph needs to know which annotation processors apply to it,
//! which means aggregating plugin metadata over its whole transitive dependency closure.
//! `plugin_depset` does that without materialising the closure at every node: records
//! are built from structurally shared sets, so merging the records of a target's direct
//! dependencies costs one new node per dependency edge.
//!
//! # Core Concepts
//!
//! - [`Depset`]: An immutable, reference-counted set that imports other sets by
//! 	reference. Deduplication is deferred until iteration, which follows the set's
//! 	[`Order`].
//!
//! - [`PluginData`]: Processor class names, processor classpath and processor data of
//! 	one or more plugins. There is a single canonical empty record.
//!
//! - [`PluginInfo`]: The provider attached to a target: all plugins, the subset that
//! 	generate API, the target's own [`BuildOutput`]s and a provenance flag telling
//! 	whether the record comes from the build tool's bundled rules.
//!
//! - **Provider identities**: during a migration the same provider exists under a builtin
//! 	and a rules-defined [`ProviderKey`]. [`PluginInfo::get`] unions both when a target
//! 	carries both.
//!
//! - [`value`]: The loosely typed values exchanged with the configuration-language
//! 	layer, and the decoders that turn them into records.
//!
//! # Example
//!
//! Records flow bottom-up: each target merges what its direct dependencies expose.
//!
//! ```
//! use plugin_depset::{ BuildOutput, PluginData, PluginInfo };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A plugin target exposes its processor.
//! let processor = PluginInfo::new(
//! 	Vec::new(),
//! 	PluginData::from_parts([ "com.example.Processor" ], [ "processor.jar" ], [ "processor.cfg" ]),
//! 	PluginData::empty(),
//! 	false,
//! );
//!
//! // Two libraries export it; both reach the same set of processors.
//! let left = PluginInfo::merge([ &processor ], false )?;
//! let right = PluginInfo::merge([ &processor ], false )?;
//!
//! // The binary depends on both libraries and sees the processor once.
//! let binary = PluginInfo::merge([ &left, &right ], false )?;
//! assert_eq!( binary.plugins().processor_classes().to_list(), vec![ "com.example.Processor" ]);
//!
//! // Build outputs never travel through a merge.
//! let library = PluginInfo::new(
//! 	[ BuildOutput::new( "liblibrary.jar" )],
//! 	processor.plugins().clone(),
//! 	PluginData::empty(),
//! 	false,
//! );
//! let merged = PluginInfo::merge([ &library, &binary ], false )?;
//! assert!( merged.build_outputs().is_empty() );
//! # Ok(())
//! # }
//! ```
//!
//! # Provider Identities
//!
//! ```
//! use plugin_depset::{ PluginData, PluginInfo, ProviderMap };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let legacy = PluginInfo::new( Vec::new(), PluginData::from_parts([ "a.A" ], Vec::<&str>::new(), Vec::<&str>::new() ), PluginData::empty(), true );
//! let current = PluginInfo::new( Vec::new(), PluginData::from_parts([ "b.B" ], Vec::<&str>::new(), Vec::<&str>::new() ), PluginData::empty(), false );
//!
//! let target = ProviderMap::new( "//java/lib" )
//! 	.with_provider( legacy )
//! 	.with_provider( current );
//!
//! let resolved = PluginInfo::get( &target )?.expect( "target carries the provider" );
//! assert_eq!( resolved.plugins().processor_classes().to_list(), vec![ "b.B", "a.A" ]);
//! assert!( !resolved.is_builtin() );
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Everything except the builders is immutable after construction and `Send + Sync`,
//! so records can be shared freely between workers evaluating independent parts of the
//! graph. Nothing in this crate blocks or performs I/O.

mod artifact ;
mod decode_error ;
mod depset ;
mod order ;
mod plugin_data ;
mod plugin_info ;
mod provider ;
mod wrap_error ;
pub mod value ;

pub use artifact::{ Artifact, BuildOutput };
pub use decode_error::DecodeError ;
pub use depset::{ Depset, DepsetBuilder, Iter, ModeConflict };
pub use order::Order ;
pub use plugin_data::PluginData ;
pub use plugin_info::PluginInfo ;
pub use provider::{ Info, Provenance, ProviderKey, ProviderMap, ProviderSlots, TargetProviders };
pub use wrap_error::WrapError ;
