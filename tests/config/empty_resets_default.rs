use backend_link::{ DrmBackendConfig, DEFAULT_FORMAT, DEFAULT_SEAT };

#[test]
fn absent_seat_resets_to_sentinel() {

	let mut config = DrmBackendConfig::new();
	config.set_seat_id( Some( "seat3" ));

	config.set_seat_id( None );
	assert_eq!( config.seat_id(), DEFAULT_SEAT );

}

#[test]
fn empty_seat_resets_to_sentinel() {

	let mut config = DrmBackendConfig::new();
	config.set_seat_id( Some( "seat3" ));

	config.set_seat_id( Some( "" ));
	assert_eq!( config.seat_id(), DEFAULT_SEAT );

}

#[test]
fn absent_format_resets_to_sentinel() {

	let mut config = DrmBackendConfig::new();
	config.set_format( Some( "rgb565" ));

	config.set_format( None );
	assert_eq!( config.format(), DEFAULT_FORMAT );

}

#[test]
fn empty_format_resets_to_sentinel() {

	let mut config = DrmBackendConfig::new();
	config.set_format( Some( "rgb565" ));

	config.set_format( Some( "" ));
	assert_eq!( config.format(), DEFAULT_FORMAT );

}
