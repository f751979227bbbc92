use std::ptr ;
use backend_link::{
	BackendArgs, DrmBackendConfig, LoadError, load_drm_backend,
	BACKEND_INIT_SYMBOL,
};

use crate::entry_points::SelfResolver ;

#[test]
fn missing_symbol_returns_the_config() {

	let mut config = DrmBackendConfig::new();
	config.set_tty( 2 );

	let mut args = BackendArgs::new([ "compositor" ]).unwrap();

	match load_drm_backend( &SelfResolver, ptr::null_mut(), &mut args, ptr::null_mut(), config ) {
		Err(( LoadError::SymbolNotFound( symbol, _ ), config )) => {
			assert_eq!( symbol, BACKEND_INIT_SYMBOL );
			assert_eq!( config.tty(), 2 );
		},
		Err(( err, _ )) => panic!( "unexpected error: {}", err ),
		Ok( _ ) => panic!( "expected resolution failure" ),
	}

}
