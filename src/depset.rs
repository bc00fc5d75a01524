//! Immutable, structurally shared transitive sets.
//!
//! A [`Depset`] is a handle to a node that holds a mix of direct elements and other
//! nodes it imported. Importing never copies: the new node points at the imported
//! node, so aggregating the sets of `N` dependencies costs `N` new branches no matter
//! how large their transitive closures are. Deduplication is deferred until the set is
//! iterated.
//!
//! Nodes are reference counted. A node is jointly owned by every set that imported it
//! and freed when the last of them is dropped.

use std::hash::Hash ;
use std::sync::Arc ;
use thiserror::Error ;

use crate::Order ;

mod builder ;
mod iter ;

pub use builder::DepsetBuilder ;
pub use iter::Iter ;



/// Returned when a depset is imported into a builder of a different [`Order`].
///
/// Mixing orders would silently reorder the imported elements, so it is always
/// rejected rather than coerced.
#[derive( Debug, Error, Copy, Clone, Eq, PartialEq )]
#[error( "Order mismatch: cannot import a {actual} depset into a {expected} depset" )]
pub struct ModeConflict {
	/// Order of the builder receiving the import.
	pub expected: Order,
	/// Order of the depset being imported.
	pub actual: Order,
}

#[derive( Debug )]
pub(crate) enum Branch<T> {
	Direct( T ),
	Nested( Arc<Node<T>> ),
}

impl<T: Clone> Clone for Branch<T> {
	fn clone( &self ) -> Self {
		match self {
			Self::Direct( element ) => Self::Direct( element.clone() ),
			Self::Nested( node ) => Self::Nested( Arc::clone( node )),
		}
	}
}

/// Never empty: empty sets are represented by the absence of a node, and
/// builders drop imports of empty sets.
#[derive( Debug )]
pub(crate) struct Node<T> {
	pub(crate) branches: Vec<Branch<T>>,
}

impl<T> Drop for Node<T> {
	fn drop( &mut self ) {
		// Unlinks uniquely owned children iteratively so that dropping a long
		// dependency chain cannot exhaust the stack.
		let mut pending = std::mem::take( &mut self.branches );
		while let Some( branch ) = pending.pop() {
			let Branch::Nested( node ) = branch else { continue };
			if let Ok( mut node ) = Arc::try_unwrap( node ) {
				pending.append( &mut node.branches );
			}
		}
	}
}



/// An immutable set of elements aggregated across a dependency graph.
///
/// Cloning a `Depset` clones a handle, not the elements. Build one with
/// [`Depset::builder`] (or [`Depset::of`] for direct elements only).
///
/// ```
/// use plugin_depset::{ Depset, Order };
///
/// let lib = Depset::of( Order::Stable, [ "a", "b" ]);
/// let mut builder = Depset::builder( Order::Stable );
/// builder.add( "b" ).add_transitive( &lib )?.add( "c" );
/// let app = builder.build();
///
/// assert_eq!( app.to_list(), vec![ "b", "a", "c" ]);
/// # Ok::<(), plugin_depset::ModeConflict>(())
/// ```
pub struct Depset<T> {
	order: Order,
	node: Option<Arc<Node<T>>>,
}

impl<T> Depset<T> {

	/// Creates an empty set of the given order.
	pub const fn empty( order: Order ) -> Self {
		Self { order, node: None }
	}

	/// Creates a new builder for a set of the given order.
	pub fn builder( order: Order ) -> DepsetBuilder<T> {
		DepsetBuilder::new( order )
	}

	/// Creates a set holding only direct elements.
	pub fn of( order: Order, elements: impl IntoIterator<Item = T> ) -> Self {
		let branches = elements.into_iter().map( Branch::Direct ).collect::<Vec<_>>();
		Self::from_branches( order, branches )
	}

	pub(crate) fn from_branches( order: Order, branches: Vec<Branch<T>> ) -> Self {
		match branches.is_empty() {
			true => Self::empty( order ),
			false => Self::from_node( order, Arc::new( Node { branches })),
		}
	}

	pub(crate) fn from_node( order: Order, node: Arc<Node<T>> ) -> Self {
		debug_assert!( !node.branches.is_empty(), "depset nodes are never empty" );
		Self { order, node: Some( node ) }
	}

	pub(crate) fn node( &self ) -> Option<&Arc<Node<T>>> { self.node.as_ref() }

	/// The order this set was built with.
	#[inline] pub fn order( &self ) -> Order { self.order }

	/// Whether the set has no elements. Constant time.
	#[inline] pub fn is_empty( &self ) -> bool { self.node.is_none() }

	/// Whether both handles point at the same underlying node.
	///
	/// Two empty sets share a node only if their orders match.
	pub fn shares_node_with( &self, other: &Self ) -> bool {
		match ( &self.node, &other.node ) {
			( None, None ) => self.order == other.order,
			( Some( left ), Some( right )) => Arc::ptr_eq( left, right ),
			_ => false,
		}
	}

}

impl<T: Eq + Hash> Depset<T> {

	/// Iterates the distinct elements in the order's linearisation.
	///
	/// The walk starts fresh on every call and visits shared sub-sets only once.
	pub fn iter( &self ) -> Iter<'_, T> {
		Iter::new( self.order, self.node.as_deref() )
	}

	/// Collects the linearisation into a vector.
	pub fn to_list( &self ) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}

}

impl<T> Clone for Depset<T> {
	fn clone( &self ) -> Self {
		Self { order: self.order, node: self.node.clone() }
	}
}

impl<T: Eq + Hash> PartialEq for Depset<T> {
	fn eq( &self, other: &Self ) -> bool {
		self.order == other.order
			&& ( self.shares_node_with( other ) || self.iter().eq( other.iter() ))
	}
}

impl<T: Eq + Hash> Eq for Depset<T> {}

impl<T: Eq + Hash + std::fmt::Debug> std::fmt::Debug for Depset<T> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Depset" )
			.field( "order", &self.order )
			.field( "elements", &self.iter().collect::<Vec<_>>() )
			.finish()
	}
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Depset<T> {
	type Item = &'a T ;
	type IntoIter = Iter<'a, T> ;
	fn into_iter( self ) -> Self::IntoIter { self.iter() }
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	#[cfg( debug_assertions )]
	#[should_panic( expected = "depset nodes are never empty" )]
	fn empty_nodes_are_rejected() {
		let _ = Depset::<u8>::from_node( Order::Stable, Arc::new( Node { branches: Vec::new() }));
	}

	#[test]
	fn no_branches_make_the_empty_set() {
		let set = Depset::<u8>::from_branches( Order::Link, Vec::new() );
		assert!( set.is_empty() );
		assert_eq!( set.order(), Order::Link );
	}

}
