#[allow( dead_code )]
mod plugin_fixtures {

	use plugin_depset::{ BuildOutput, PluginData, PluginInfo };

	/// Plugin data holding a single processor class, its jar and no data.
	pub fn processor( class: &str ) -> PluginData {
		let jar = format!( "{}.jar", class.to_lowercase().replace( '.', "_" ));
		PluginData::from_parts([ class ], [ jar ], Vec::<&str>::new() )
	}

	/// A non-empty plugin record with one processor that does not generate API.
	pub fn plugin_info( class: &str, builtin: bool ) -> PluginInfo {
		PluginInfo::new( Vec::new(), processor( class ), PluginData::empty(), builtin )
	}

	/// A non-empty plugin record with one API-generating processor.
	pub fn api_plugin_info( class: &str, builtin: bool ) -> PluginInfo {
		let data = processor( class );
		PluginInfo::new( Vec::new(), data.clone(), data, builtin )
	}

	/// A plugin record that also carries the outputs of the target that produced it.
	pub fn plugin_info_with_outputs( class: &str, jar: &str, builtin: bool ) -> PluginInfo {
		PluginInfo::new([ BuildOutput::new( jar )], processor( class ), PluginData::empty(), builtin )
	}

}
