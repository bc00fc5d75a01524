use plugin_depset::{ Artifact, BuildOutput, DecodeError, Info, PluginData, PluginInfo, Provenance, ProviderKey, WrapError };
use plugin_depset::value::{ Struct, Value };

use crate::plugin_fixtures::{ api_plugin_info, processor };

fn plugin_struct( provenance: Provenance, java_outputs: Value ) -> Info {
	Info::Struct {
		key: ProviderKey::PluginInfo( provenance ),
		fields: Struct::new([
			( "java_outputs", java_outputs ),
			( "plugins", processor( "a.A" ).to_struct().into() ),
			( "api_generating_plugins", Value::PluginData( PluginData::empty() )),
		]),
	}
}

fn output( class_jar: &str ) -> Value {
	Value::Struct( Struct::new([( "class_jar", Value::Artifact( Artifact::new( class_jar )))]))
}

#[test]
fn native_record_passes_through() {

	let native = api_plugin_info( "a.A", true );
	let wrapped = PluginInfo::wrap( &Info::from( native.clone() )).unwrap();

	assert!( PluginInfo::ptr_eq( &wrapped, &native ));

}

#[test]
fn struct_under_plugin_identity_is_decoded() {

	let info = plugin_struct( Provenance::Builtin, Value::List( vec![ output( "liba.jar" )]));
	let wrapped = PluginInfo::wrap( &info ).unwrap();

	assert!( wrapped.is_builtin() );
	assert_eq!( wrapped.build_outputs(), &[ BuildOutput::new( "liba.jar" )]);
	assert_eq!( wrapped.plugins(), &processor( "a.A" ));
	assert!( wrapped.api_generating_plugins().is_empty() );

}

#[test]
fn encoded_record_wraps_back_to_an_equal_record() {

	let native = PluginInfo::new(
		[ BuildOutput::new( "liba.jar" ).with_compile_jar( "liba-hjar.jar" ).with_source_jars([ "liba-src.jar" ])],
		processor( "a.A" ),
		processor( "a.A" ),
		false,
	);

	let info = native.to_info();
	assert_eq!( info.key(), ProviderKey::PluginInfo( Provenance::RulesDefined ));

	let wrapped = PluginInfo::wrap( &info ).unwrap();
	assert_eq!( wrapped, native );

}

#[test]
fn java_info_is_not_a_plugin_provider() {

	let info = Info::Struct { key: ProviderKey::JavaInfo( Provenance::RulesDefined ), fields: Struct::default() };
	let err = PluginInfo::wrap( &info ).unwrap_err();

	assert_eq!( err.to_string(), "got element of type JavaInfo, want JavaPluginInfo" );

}

#[test]
fn unknown_provider_is_named_in_the_error() {

	let info = Info::Struct { key: ProviderKey::Other( "CcInfo".to_string() ), fields: Struct::default() };
	let err = PluginInfo::wrap( &info ).unwrap_err();

	assert_eq!( err, WrapError::TypeMismatch { actual: "CcInfo".to_string(), expected: "JavaPluginInfo".to_string() });

}

#[test]
fn wrap_value_requires_a_provider_instance() {

	let err = PluginInfo::wrap_value( &Value::Int( 3 )).unwrap_err();
	assert_eq!( err.to_string(), "got element of type int, want JavaPluginInfo" );

	let native = PluginInfo::empty( true );
	let wrapped = PluginInfo::wrap_value( &Value::Info( Info::from( native.clone() ))).unwrap();
	assert!( PluginInfo::ptr_eq( &wrapped, &native ));

}

#[test]
fn malformed_build_output_is_a_decode_error() {

	let info = plugin_struct( Provenance::RulesDefined, Value::List( vec![ Value::String( "liba.jar".to_string() )]));
	let err = PluginInfo::wrap( &info ).unwrap_err();

	assert!( matches!( err, WrapError::Decode( DecodeError::WrongType { .. })));

}

#[test]
fn missing_class_jar_is_a_decode_error() {

	let info = plugin_struct( Provenance::RulesDefined, Value::List( vec![ Value::Struct( Struct::default() )]));
	let err = PluginInfo::wrap( &info ).unwrap_err();

	assert_eq!( err, WrapError::Decode( DecodeError::MissingField { field: "class_jar".to_string() }));

}
