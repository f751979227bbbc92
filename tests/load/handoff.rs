use std::ptr ;
use backend_link::{
	BackendArgs, DrmBackendConfig, OutputConfig, OutputMode, Transform,
	load_drm_backend,
};

use crate::entry_points::{ recording_init, StaticResolver, RECORDED };

#[test]
fn entry_invoked_exactly_once_with_the_built_view() {

	let mut config = DrmBackendConfig::new();
	config.set_connector( 3 );
	config.set_format( Some( "rgb565" ));
	config.add_output(
		OutputConfig::new( "HDMI-A-1", 2, Transform::Normal ).unwrap()
			.with_mode( OutputMode::Preferred )
			.with_modeline( "1920x1080" ),
	);

	let mut args = BackendArgs::new([ "compositor", "--drm-device=card0" ]).unwrap();

	let loaded = load_drm_backend(
		&StaticResolver( recording_init ),
		ptr::null_mut(),
		&mut args,
		ptr::null_mut(),
		config,
	).expect( "static resolver can't fail" );

	assert!( loaded.is_success() );
	assert_eq!( loaded.status(), 0 );

	// The module saw the base view and, through the repr(C) upcast, the full
	// configuration exactly as built - and it saw it exactly once.
	let recorded = RECORDED.lock().unwrap();
	assert_eq!( recorded.len(), 1 );
	let observed = &recorded[ 0 ];
	assert_eq!( observed.connector, 3 );
	assert_eq!( observed.format, "rgb565" );
	assert_eq!( observed.seat, "seat0" );
	assert_eq!( observed.output_names, vec![ "HDMI-A-1" ]);
	assert_eq!( observed.base_scale, 1 );
	assert_eq!( observed.argc, 2 );

}
