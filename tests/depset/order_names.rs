use plugin_depset::{ DecodeError, Order };

#[test]
fn order_names_round_trip() {

	for order in Order::ALL {
		assert_eq!( Order::parse( order.name() ), Ok( order ));
		assert_eq!( order.to_string(), order.name() );
	}

}

#[test]
fn unknown_order_name_is_rejected() {

	let err = Order::parse( "random" ).unwrap_err();

	assert_eq!( err, DecodeError::UnknownOrder { name: "random".to_string() });
	assert_eq!( err.to_string(), "Invalid order: random (want one of default, postorder, preorder, topological)" );

}

#[test]
fn plugin_sets_use_the_default_order() {
	assert_eq!( Order::default(), Order::Stable );
	assert_eq!( plugin_depset::PluginData::ORDER, Order::Stable );
}
