use plugin_depset::{ Info, PluginInfo, Provenance, ProviderKey, ProviderMap, ProviderSlots, TargetProviders, WrapError };
use plugin_depset::value::Struct ;

use crate::plugin_fixtures::plugin_info ;

#[test]
fn target_without_the_provider() {

	let target = ProviderMap::new( "//java/empty" );
	assert_eq!( PluginInfo::get( &target ).unwrap(), None );

}

#[test]
fn target_with_one_identity() {

	let legacy = plugin_info( "a.A", true );
	let target = ProviderMap::new( "//java/legacy" ).with_provider( legacy.clone() );

	let slots = ProviderSlots::lookup( &target ).unwrap();
	assert!( slots.current.is_none() );
	assert!( PluginInfo::ptr_eq( slots.legacy.as_ref().unwrap(), &legacy ));

	let resolved = PluginInfo::get( &target ).unwrap().unwrap();
	assert!( resolved.is_builtin() );

}

#[test]
fn target_with_both_identities() {

	let target = ProviderMap::new( "//java/both" )
		.with_provider( plugin_info( "a.A", true ))
		.with_provider( plugin_info( "b.B", false ));

	let resolved = PluginInfo::get( &target ).unwrap().unwrap();

	assert_iterates!( resolved.plugins().processor_classes(), [ "b.B", "a.A" ]);
	assert!( !resolved.is_builtin() );

}

#[test]
fn struct_providers_are_decoded_on_lookup() {

	let encoded = plugin_info( "a.A", false ).to_info();
	let target = ProviderMap::new( "//java/encoded" ).with_provider( encoded );

	let resolved = PluginInfo::get( &target ).unwrap().unwrap();
	assert_eq!( resolved, plugin_info( "a.A", false ));

}

#[test]
fn malformed_provider_fails_the_lookup() {

	let mut target = ProviderMap::new( "//java/broken" );
	target.insert( Info::Struct { key: ProviderKey::PluginInfo( Provenance::Builtin ), fields: Struct::default() });

	let err = PluginInfo::get( &target ).unwrap_err();
	assert!( matches!( err, WrapError::Decode( _ )));

}

#[test]
fn insert_replaces_the_previous_instance() {

	let mut target = ProviderMap::new( "//java/lib" );

	assert!( target.insert( plugin_info( "a.A", false ).into() ).is_none() );
	assert!( target.insert( plugin_info( "b.B", false ).into() ).is_some() );
	assert_eq!( target.label(), "//java/lib" );

	let current = target.provider( &ProviderKey::PluginInfo( Provenance::RulesDefined ));
	assert!( matches!( current, Some( Info::Plugin( info )) if info.has_processors() ));

}
