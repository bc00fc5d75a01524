use std::collections::HashSet ;
use std::hash::Hash ;

use crate::Order ;
use super::{ Branch, Node };



/// Which branches of a node a traversal pass looks at.
#[derive( Copy, Clone, Debug )]
enum Pass { All, Direct, Nested }

impl Pass {
	fn accepts<T>( self, branch: &Branch<T> ) -> bool {
		matches!(
			( self, branch ),
			( Pass::All, _ ) | ( Pass::Direct, Branch::Direct( _ )) | ( Pass::Nested, Branch::Nested( _ )),
		)
	}
}

struct Frame<'a, T> {
	branches: &'a [Branch<T>],
	pass: usize,
	index: usize,
}

impl<'a, T> Frame<'a, T> {

	fn new( node: &'a Node<T> ) -> Self {
		Self { branches: &node.branches, pass: 0, index: 0 }
	}

	fn next_branch( &mut self, reverse: bool ) -> Option<&'a Branch<T>> {
		let position = match reverse {
			false => self.index,
			true => self.branches.len().checked_sub( self.index + 1 )?,
		};
		let branch = self.branches.get( position )?;
		self.index += 1 ;
		Some( branch )
	}

}

/// Depth-first walk over the node graph with an explicit stack.
///
/// Every node is entered at most once and every element yielded at most once.
struct Walk<'a, T> {
	stack: Vec<Frame<'a, T>>,
	passes: &'static [Pass],
	reverse: bool,
	seen: HashSet<&'a T>,
	entered: HashSet<usize>,
}

impl<'a, T: Eq + Hash> Walk<'a, T> {

	fn new( root: &'a Node<T>, passes: &'static [Pass], reverse: bool ) -> Self {
		Self {
			stack: vec![ Frame::new( root )],
			passes,
			reverse,
			seen: HashSet::new(),
			entered: HashSet::from([ node_key( root )]),
		}
	}

	fn next( &mut self ) -> Option<&'a T> {
		loop {
			let frame = self.stack.last_mut()?;
			let Some( &pass ) = self.passes.get( frame.pass ) else {
				self.stack.pop();
				continue ;
			};
			let Some( branch ) = frame.next_branch( self.reverse ) else {
				frame.pass += 1 ;
				frame.index = 0 ;
				continue ;
			};
			if !pass.accepts( branch ) { continue }
			match branch {
				Branch::Direct( element ) => if self.seen.insert( element ) { return Some( element ) },
				Branch::Nested( node ) => if self.entered.insert( node_key( node )) {
					self.stack.push( Frame::new( node ));
				},
			}
		}
	}

}

fn node_key<T>( node: &Node<T> ) -> usize {
	std::ptr::from_ref( node ) as usize
}

enum State<'a, T> {
	Empty,
	Walking( Walk<'a, T> ),
	Reversing( Walk<'a, T> ),
	Buffered( std::iter::Rev<std::vec::IntoIter<&'a T>> ),
}

/// Iterator over the distinct elements of a [`Depset`]( super::Depset ).
///
/// Created by [`Depset::iter`]( super::Depset::iter ). Elements are produced lazily
/// for every order except [`Order::Link`], which has to see the whole graph before
/// yielding its first element and does so on the first call to `next`.
pub struct Iter<'a, T> {
	state: State<'a, T>,
}

impl<'a, T: Eq + Hash> Iter<'a, T> {

	pub(super) fn new( order: Order, root: Option<&'a Node<T>> ) -> Self {
		let Some( root ) = root else { return Self { state: State::Empty }};
		let state = match order {
			Order::Stable => State::Walking( Walk::new( root, &[ Pass::All ], false )),
			Order::Compile => State::Walking( Walk::new( root, &[ Pass::Nested, Pass::Direct ], false )),
			Order::NaiveLink => State::Walking( Walk::new( root, &[ Pass::Direct, Pass::Nested ], false )),
			Order::Link => State::Reversing( Walk::new( root, &[ Pass::Nested, Pass::Direct ], true )),
		};
		Self { state }
	}

}

impl<'a, T: Eq + Hash> Iterator for Iter<'a, T> {
	type Item = &'a T ;

	fn next( &mut self ) -> Option<Self::Item> {
		match &mut self.state {
			State::Empty => None,
			State::Walking( walk ) => walk.next(),
			State::Buffered( elements ) => elements.next(),
			State::Reversing( walk ) => {
				let elements = std::iter::from_fn(|| walk.next()).collect::<Vec<_>>();
				let mut elements = elements.into_iter().rev();
				let first = elements.next();
				self.state = State::Buffered( elements );
				first
			}
		}
	}
}

impl<T: Eq + Hash> std::iter::FusedIterator for Iter<'_, T> {}

impl<T> std::fmt::Debug for Iter<'_, T> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		let state = match self.state {
			State::Empty => "empty",
			State::Walking( _ ) => "walking",
			State::Reversing( _ ) => "pending",
			State::Buffered( _ ) => "buffered",
		};
		f.debug_struct( "Iter" ).field( "state", &state ).finish_non_exhaustive()
	}
}
