use std::sync::Arc ;

use crate::Order ;
use super::{ Branch, Depset, ModeConflict };



/// Accumulates direct elements and imported sets for a new [`Depset`].
///
/// A builder is single-owner scratch space: nothing it holds is observable until
/// [`build`]( Self::build ) is called, and building leaves the builder usable, so
/// repeated builds return equal sets.
///
/// No uniqueness check happens while adding; duplicates are elided on iteration.
#[derive( Debug )]
pub struct DepsetBuilder<T> {
	order: Order,
	branches: Vec<Branch<T>>,
}

impl<T> DepsetBuilder<T> {

	/// Creates an empty builder for a set of the given order.
	pub fn new( order: Order ) -> Self {
		Self { order, branches: Vec::new() }
	}

	/// The order of the set being built.
	#[inline] pub fn order( &self ) -> Order { self.order }

	/// Whether nothing that contributes an element has been added yet.
	#[inline] pub fn is_empty( &self ) -> bool { self.branches.is_empty() }

	/// Appends a direct element.
	pub fn add( &mut self, element: T ) -> &mut Self {
		self.branches.push( Branch::Direct( element ));
		self
	}

	/// Appends direct elements in iteration order.
	pub fn add_all( &mut self, elements: impl IntoIterator<Item = T> ) -> &mut Self {
		self.branches.extend( elements.into_iter().map( Branch::Direct ));
		self
	}

	/// Imports another set by reference.
	///
	/// The imported node is shared, not copied. Empty sets are accepted but leave
	/// no trace in the result.
	///
	/// # Errors
	/// Returns [`ModeConflict`] if `set` was built with a different order, even when
	/// `set` is empty.
	pub fn add_transitive( &mut self, set: &Depset<T> ) -> Result<&mut Self, ModeConflict> {
		if set.order() != self.order {
			return Err( ModeConflict { expected: self.order, actual: set.order() });
		}
		if let Some( node ) = set.node() {
			self.branches.push( Branch::Nested( Arc::clone( node )));
		}
		Ok( self )
	}

	/// Produces the immutable set.
	///
	/// A builder holding a single import and nothing else returns that import's
	/// node itself instead of wrapping it.
	pub fn build( &self ) -> Depset<T>
	where
		T: Clone,
	{
		match self.branches.as_slice() {
			[ Branch::Nested( node ) ] => Depset::from_node( self.order, Arc::clone( node )),
			branches => Depset::from_branches( self.order, branches.to_vec() ),
		}
	}

}
