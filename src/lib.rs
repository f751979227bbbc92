//! A display-backend configuration and loading library for building modular
//! compositors.
//!
//! A compositor frontend describes how its DRM backend should come up - which
//! connector, which tty, which renderer, per-output overrides - without
//! linking against the backend at all. `backend_link` carries that
//! description across the load boundary: it builds a typed, heap-owned
//! configuration object, resolves the backend module dynamically, and hands
//! the object off with ownership through one fixed entry symbol.
//!
//! # Core Concepts
//!
//! - [`DrmBackendConfig`]: The configuration object. Owns every string and
//! 	override record reachable from it; mutable until handoff, the module's
//! 	property afterwards.
//!
//! - [`BackendConfigBase`]: The frozen header embedded first in the
//! 	configuration object. It is the only layout the loader and every
//! 	loadable module version must agree on, which is what lets the backend
//! 	be swapped or upgraded without recompiling the frontend.
//!
//! - [`OutputConfig`]: A declarative override record for one connector.
//! 	Plain data resolved by the module itself at initialization time - no
//! 	caller callbacks cross the boundary, so nothing about per-output
//! 	configuration leaks into the ABI.
//!
//! - [`ModuleResolver`]: The seam to the host's module-loading facility:
//! 	`resolve( module, symbol )` to a callable, or failure.
//! 	[`DynamicResolver`] is the libloading-backed implementation.
//!
//! - [`load_drm_backend`]: The trampoline. One resolution attempt, one
//! 	invocation attempt. Failure hands the configuration object back;
//! 	success means the module owns it.
//!
//! # Example
//!
//! ```
//! use std::ptr ;
//! use backend_link::{
//! 	BackendArgs, DrmBackendConfig, DynamicResolver, LoadError,
//! 	OutputConfig, OutputMode, Transform, load_drm_backend,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Build the configuration object. Strings are always copied; the object
//! // owns everything reachable from it.
//! let mut config = DrmBackendConfig::new();
//! config.set_connector( 3 );
//! config.set_format( Some( "rgb565" ));
//!
//! // Per-output overrides are plain data, appended in call order.
//! config.add_output(
//! 	OutputConfig::new( "HDMI-A-1", 2, Transform::Normal )?
//! 		.with_mode( OutputMode::Preferred )
//! 		.with_modeline( "1920x1080" ),
//! );
//!
//! // Hand off. The backend module isn't installed here, so resolution
//! // fails, no invocation happens, and the object comes back still ours.
//! let mut args = BackendArgs::new( [ "compositor" ] )?;
//! match load_drm_backend( &DynamicResolver, ptr::null_mut(), &mut args, ptr::null_mut(), config ) {
//! 	Err(( LoadError::ModuleNotFound( module, _ ), config )) => {
//! 		assert_eq!( module, "drm-backend.so" );
//! 		assert_eq!( config.connector(), 3 );
//! 		// still valid, still ours to drop
//! 	},
//! 	Err(( err, _ )) => panic!( "unexpected error: {}", err ),
//! 	Ok( loaded ) => println!( "backend up, status {}", loaded.status() ),
//! }
//! # Ok(())
//! # }
//! ```

mod config ;
mod output ;
mod transform ;
mod args ;
mod loader ;

pub use config::{ BackendConfigBase, DrmBackendConfig, DEFAULT_FORMAT, DEFAULT_SEAT };
pub use output::{ ConfigError, OutputConfig, OutputMode };
pub use transform::Transform ;
pub use args::BackendArgs ;
pub use loader::{
	BackendInitFn, DynamicResolver, LoadError, LoadedBackend, ModuleResolver,
	load_drm_backend, BACKEND_INIT_SYMBOL, DRM_BACKEND_MODULE,
};
