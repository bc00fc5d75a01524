//! Traversal orders for [`Depset`]( crate::Depset ).
//!
//! The order of a depset is fixed when its builder is created and decides how
//! [`Depset::iter`]( crate::Depset::iter ) linearises the nested structure. Two
//! depsets can only be nested into one another when their orders match exactly.

use crate::value::DecodeError ;



/// How a [`Depset`]( crate::Depset ) is linearised.
///
/// Every order yields each distinct element exactly once. They differ in where the
/// direct elements of a set land relative to the elements of the sets it imports,
/// and in which occurrence of a duplicate survives.
///
/// - `Stable`: branches are walked depth first in the exact order they were added
///   to the builder, direct elements and imports interleaved. First occurrence wins.
///
/// - `Compile`: postorder. Imports (left to right) before the set's own elements.
///
/// - `NaiveLink`: preorder. The set's own elements before its imports (left to right).
///
/// - `Link`: topological. A set's own elements come before anything it imports, and
///   an element reachable through several imports lands after every set that
///   depends on it.
#[derive( Copy, Clone, Eq, PartialEq, Hash, Debug, Default )]
pub enum Order {
	/// Insertion order, first occurrence kept.
	#[default] Stable,
	/// Postorder: dependencies before dependants.
	Compile,
	/// Preorder: dependants before dependencies, duplicates resolved naively.
	NaiveLink,
	/// Topological: dependants before dependencies, shared dependencies last.
	Link,
}

impl Order {

	/// All supported orders.
	pub const ALL: [Order; 4] = [ Order::Stable, Order::Compile, Order::NaiveLink, Order::Link ];

	/// Name of the order as seen by the configuration-value layer.
	pub const fn name( self ) -> &'static str {
		match self {
			Self::Stable => "default",
			Self::Compile => "postorder",
			Self::NaiveLink => "preorder",
			Self::Link => "topological",
		}
	}

	/// Inverse of [`Order::name`].
	///
	/// # Errors
	/// Returns [`DecodeError::UnknownOrder`] for any other name.
	pub fn parse( name: &str ) -> Result<Self, DecodeError> {
		Self::ALL.into_iter()
			.find(| order | order.name() == name )
			.ok_or_else(|| DecodeError::UnknownOrder { name: name.to_string() })
	}

}

impl std::fmt::Display for Order {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result { f.write_str( self.name()) }
}
