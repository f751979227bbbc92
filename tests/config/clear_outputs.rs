use backend_link::{ DrmBackendConfig, OutputConfig, Transform };

#[test]
fn clear_empties_but_parent_survives() {

	let mut config = DrmBackendConfig::new();
	config.set_connector( 3 );
	config.add_output( OutputConfig::new( "HDMI-A-1", 1, Transform::Normal ).unwrap() );
	config.add_output( OutputConfig::new( "DP-1", 2, Transform::Normal ).unwrap() );

	config.clear_outputs();

	assert_eq!( config.outputs().len(), 0 );
	// The parent keeps its own state and stays usable.
	assert_eq!( config.connector(), 3 );
	config.add_output( OutputConfig::new( "DP-2", 1, Transform::Normal ).unwrap() );
	assert_eq!( config.outputs().len(), 1 );

}

#[test]
fn clear_on_empty_collection_is_a_noop() {

	let mut config = DrmBackendConfig::new();
	config.clear_outputs();
	config.clear_outputs();
	assert!( config.outputs().is_empty() );

}
