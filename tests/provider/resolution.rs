use plugin_depset::{ PluginInfo, ProviderSlots };

use crate::plugin_fixtures::{ plugin_info, plugin_info_with_outputs };

#[test]
fn no_slot_resolves_to_nothing() {

	assert_eq!( ProviderSlots::default().resolve().unwrap(), None );

}

#[test]
fn current_slot_alone_is_returned_as_is() {

	let current = plugin_info_with_outputs( "a.A", "liba.jar", false );
	let slots = ProviderSlots { current: Some( current.clone() ), legacy: None };

	let resolved = slots.resolve().unwrap().unwrap();
	assert!( PluginInfo::ptr_eq( &resolved, &current ));

}

#[test]
fn legacy_slot_alone_keeps_its_provenance() {

	let legacy = plugin_info( "a.A", true );
	let slots = ProviderSlots { current: None, legacy: Some( legacy.clone() ) };

	let resolved = slots.resolve().unwrap().unwrap();
	assert!( resolved.is_builtin() );
	assert!( PluginInfo::ptr_eq( &resolved, &legacy ));

}

#[test]
fn both_slots_are_unioned_current_first() {

	let slots = ProviderSlots {
		current: Some( plugin_info( "b.B", false )),
		legacy: Some( plugin_info( "a.A", true )),
	};

	let resolved = slots.resolve().unwrap().unwrap();

	assert_iterates!( resolved.plugins().processor_classes(), [ "b.B", "a.A" ]);
	assert!( !resolved.is_builtin() );

}

#[test]
fn empty_legacy_slot_leaves_current_untouched() {

	let current = plugin_info_with_outputs( "a.A", "liba.jar", false );
	let slots = ProviderSlots { current: Some( current.clone() ), legacy: Some( PluginInfo::empty( true )) };

	let resolved = slots.resolve().unwrap().unwrap();
	assert!( PluginInfo::ptr_eq( &resolved, &current ));
	assert_eq!( resolved.build_outputs().len(), 1 );

}
