use backend_link::DrmBackendConfig ;

#[test]
fn seat_id_is_copied_not_aliased() {

	let mut caller_buffer = String::from( "seat7" );

	let mut config = DrmBackendConfig::new();
	config.set_seat_id( Some( &caller_buffer ));
	assert_eq!( config.seat_id(), "seat7" );

	// Mutating the caller's buffer afterwards must not change the stored
	// value - the object owns an independent copy.
	caller_buffer.replace_range( .., "garbage" );
	assert_eq!( config.seat_id(), "seat7" );

}

#[test]
fn format_is_copied_not_aliased() {

	let mut caller_buffer = String::from( "rgb565" );

	let mut config = DrmBackendConfig::new();
	config.set_format( Some( &caller_buffer ));
	assert_eq!( config.format(), "rgb565" );

	caller_buffer.clear();
	assert_eq!( config.format(), "rgb565" );

}

#[test]
fn repeated_sets_replace_the_owned_copy() {

	let mut config = DrmBackendConfig::new();

	config.set_seat_id( Some( "seat1" ));
	config.set_seat_id( Some( "seat2" ));
	assert_eq!( config.seat_id(), "seat2" );

	config.set_format( Some( "xrgb2101010" ));
	config.set_format( Some( "xrgb8888" ));
	assert_eq!( config.format(), "xrgb8888" );

}
