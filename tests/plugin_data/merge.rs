use plugin_depset::{ Depset, ModeConflict, Order, PluginData };

use crate::plugin_fixtures::processor ;

#[test]
fn merging_nothing_returns_canonical_empty() {

	let merged = PluginData::merge( Vec::<&PluginData>::new() ).unwrap();
	assert!( PluginData::ptr_eq( &merged, &PluginData::empty() ));

}

#[test]
fn merging_empty_records_returns_canonical_empty() {

	let merged = PluginData::merge([ &PluginData::empty(), &PluginData::empty() ]).unwrap();
	assert!( PluginData::ptr_eq( &merged, &PluginData::empty() ));

}

#[test]
fn merge_preserves_declaration_order() {

	let first = PluginData::from_parts([ "A" ], Vec::<&str>::new(), Vec::<&str>::new() );
	let second = PluginData::from_parts([ "B" ], Vec::<&str>::new(), Vec::<&str>::new() );

	let merged = PluginData::merge([ &first, &second ]).unwrap();

	assert_iterates!( merged.processor_classes(), [ "A", "B" ]);
	assert!( merged.processor_classpath().is_empty() );
	assert!( merged.processor_data().is_empty() );

}

#[test]
fn merge_merges_every_field() {

	let first = PluginData::from_parts([ "A" ], [ "a.jar", "common.jar" ], [ "a.cfg" ]);
	let second = PluginData::from_parts([ "B", "A" ], [ "common.jar", "b.jar" ], [ "b.cfg" ]);

	let merged = PluginData::merge([ &first, &second ]).unwrap();

	assert_iterates!( merged.processor_classes(), [ "A", "B" ]);
	assert_iterates!( merged.processor_classpath(), [ "a.jar", "common.jar", "b.jar" ]);
	assert_iterates!( merged.processor_data(), [ "a.cfg", "b.cfg" ]);

}

#[test]
fn merging_with_itself_or_empty_is_idempotent() {

	let record = processor( "a.Processor" );

	assert_eq!( PluginData::merge([ &record, &record ]).unwrap(), record );
	assert_eq!( PluginData::merge([ &record, &PluginData::empty() ]).unwrap(), record );

}

#[test]
fn merging_a_single_record_shares_its_sets() {

	let record = processor( "a.Processor" );
	let merged = PluginData::merge([ &record ]).unwrap();

	assert!( merged.processor_classes().shares_node_with( record.processor_classes() ));
	assert!( merged.processor_classpath().shares_node_with( record.processor_classpath() ));

}

#[test]
fn merge_rejects_sets_of_another_order() {

	let foreign = PluginData::create(
		Depset::of( Order::Link, [ "A".to_string() ]),
		Depset::empty( Order::Stable ),
		Depset::empty( Order::Stable ),
	);

	let err = PluginData::merge([ &processor( "b.B" ), &foreign ]).unwrap_err();
	assert_eq!( err, ModeConflict { expected: Order::Stable, actual: Order::Link });

}
