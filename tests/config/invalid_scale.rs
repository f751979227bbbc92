use backend_link::{ ConfigError, OutputConfig, OutputMode, Transform };

#[test]
fn zero_scale_is_rejected_at_construction() {
	match OutputConfig::new( "HDMI-A-1", 0, Transform::Normal ) {
		Err( ConfigError::InvalidScale( name )) => assert_eq!( name, "HDMI-A-1" ),
		Ok( _ ) => panic!( "expected rejection" ),
	}
}

#[test]
fn zero_scale_is_rejected_in_place_and_value_kept() {

	let mut output = OutputConfig::new( "DP-1", 2, Transform::Normal ).unwrap()
		.with_mode( OutputMode::Current );

	assert!( output.set_scale( 0 ).is_err() );
	// The degenerate value was never stored.
	assert_eq!( output.scale(), 2 );

}
