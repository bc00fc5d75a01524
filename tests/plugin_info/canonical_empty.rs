use plugin_depset::{ PluginData, PluginInfo };

#[test]
fn empty_records_are_canonical_per_provenance() {

	assert!( PluginInfo::ptr_eq( &PluginInfo::empty( true ), &PluginInfo::empty( true )));
	assert!( PluginInfo::ptr_eq( &PluginInfo::empty( false ), &PluginInfo::empty( false )));
	assert!( !PluginInfo::ptr_eq( &PluginInfo::empty( true ), &PluginInfo::empty( false )));
	assert_ne!( PluginInfo::empty( true ), PluginInfo::empty( false ));

}

#[test]
fn empty_record_holds_empty_plugin_data() {

	let empty = PluginInfo::empty( false );

	assert!( empty.is_empty() );
	assert!( !empty.has_processors() );
	assert!( empty.build_outputs().is_empty() );
	assert!( PluginData::ptr_eq( empty.plugins(), &PluginData::empty() ));
	assert!( PluginData::ptr_eq( empty.api_generating_plugins(), &PluginData::empty() ));

}

#[test]
fn classpath_without_classes_is_not_empty_but_has_no_processors() {

	let classpath_only = PluginInfo::new(
		Vec::new(),
		PluginData::from_parts( Vec::<&str>::new(), [ "lib.jar" ], Vec::<&str>::new() ),
		PluginData::empty(),
		false,
	);

	assert!( !classpath_only.is_empty() );
	assert!( !classpath_only.has_processors() );

}
