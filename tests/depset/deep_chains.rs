use plugin_depset::{ Depset, Order };

const DEPTH: usize = 100_000 ;

fn chain( order: Order ) -> Depset<usize> {
	let mut set = Depset::empty( order );
	for level in 0..DEPTH {
		let mut builder = Depset::builder( order );
		builder.add( level ).add_transitive( &set ).unwrap();
		set = builder.build();
	}
	set
}

#[test]
fn deep_chain_iterates_without_recursion() {

	for order in Order::ALL {
		let set = chain( order );
		assert_eq!( set.iter().count(), DEPTH, "order {}", order );
	}

}

#[test]
fn deep_chain_orders() {

	let stable = chain( Order::Stable ).iter().take( 3 ).copied().collect::<Vec<_>>();
	assert_eq!( stable, vec![ DEPTH - 1, DEPTH - 2, DEPTH - 3 ]);

	let compile = chain( Order::Compile ).iter().take( 3 ).copied().collect::<Vec<_>>();
	assert_eq!( compile, vec![ 0, 1, 2 ]);

	let link = chain( Order::Link ).iter().take( 3 ).copied().collect::<Vec<_>>();
	assert_eq!( link, vec![ DEPTH - 1, DEPTH - 2, DEPTH - 3 ]);

}

#[test]
fn deep_chain_drops_without_recursion() {
	drop( chain( Order::Stable ));
}
