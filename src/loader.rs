//! Backend module resolution and the load trampoline.
//!
//! This module handles the transformation from a built [`DrmBackendConfig`]
//! into a running backend. The load process:
//!
//! 1. Resolves the backend module by its fixed file name
//! 2. Resolves the fixed entry symbol within it
//! 3. Invokes the entry with the host handles and the configuration's
//!    frozen base view, transferring ownership of the configuration
//!
//! Exactly one resolution attempt and one invocation attempt per call; no
//! retries, and nothing is cached across calls. Resolution failures are
//! terminal for that attempt and hand the configuration object back to the
//! caller; once the entry symbol has been invoked, the module owns the
//! object whatever status code it returns.

use std::ffi::{ c_char, c_int, c_void };
use itertools::Itertools ;
use libloading::Library ;
use log::{ info, warn };
use pipe_trait::Pipe ;
use thiserror::Error ;

use crate::args::BackendArgs ;
use crate::config::{ BackendConfigBase, DrmBackendConfig };
use crate::output::OutputConfig ;

/// File name of the DRM backend module.
pub const DRM_BACKEND_MODULE: &str = "drm-backend.so" ;
/// Entry symbol every backend module exports.
pub const BACKEND_INIT_SYMBOL: &str = "backend_init" ;



/// The fixed entry contract every backend module exports as
/// [`BACKEND_INIT_SYMBOL`].
///
/// `compositor` and `host_config` are opaque host handles passed through
/// untouched. `config_base` is the frozen view of the configuration object;
/// a module built against the same header version may upcast it to the full
/// [`DrmBackendConfig`], and owns the object from this call on. Returns 0 on
/// success, negative on failure.
pub type BackendInitFn = unsafe extern "C" fn(
	compositor: *mut c_void,
	argc: *mut c_int,
	argv: *mut *mut c_char,
	host_config: *mut c_void,
	config_base: *mut BackendConfigBase,
) -> c_int ;

/// Errors that can occur while resolving the backend module.
///
/// Either variant means the entry symbol was never invoked: the
/// configuration object comes back to the caller inside the `Err` tuple of
/// [`load_drm_backend`] and the caller remains responsible for it.
#[derive( Error, Debug )]
pub enum LoadError {
	/// The module could not be resolved by name.
	#[error( "Module not found '{0}': {1}" )] ModuleNotFound( String, libloading::Error ),
	/// The module resolved but does not export the entry symbol.
	#[error( "Symbol not found '{0}': {1}" )] SymbolNotFound( String, libloading::Error ),
}

/// The module-loading facility, as a seam.
///
/// The host compositor resolves a shared-object name and a symbol name to a
/// callable; everything behind that contract is opaque to this crate.
/// [`DynamicResolver`] is the real implementation. Substituting another one
/// is how the load path is exercised without a shared object on disk.
pub trait ModuleResolver {
	/// Resolves `symbol` within the module named `module`.
	///
	/// # Errors
	/// [`LoadError::ModuleNotFound`] if the module can't be opened,
	/// [`LoadError::SymbolNotFound`] if it lacks the symbol.
	fn resolve( &self, module: &str, symbol: &str ) -> Result<BackendInitFn, LoadError> ;
}

/// [`ModuleResolver`] backed by the platform dynamic linker.
///
/// Opens the module with `libloading` and leaks the handle: a resolved
/// backend module stays loaded for the rest of the process, so the returned
/// entry pointer never dangles.
#[derive( Copy, Clone, Debug, Default )]
pub struct DynamicResolver ;

impl ModuleResolver for DynamicResolver {
	fn resolve( &self, module: &str, symbol: &str ) -> Result<BackendInitFn, LoadError> {
		// SAFETY: opening a shared object runs its initializers; backend
		// modules are trusted code named by the host, not user input.
		let library = unsafe { Library::new( module ) }
			.map_err(| err | LoadError::ModuleNotFound( module.to_string(), err ))?;

		// SAFETY: the symbol is only ever used through `BackendInitFn`, the
		// one signature the module contract defines for this export.
		let entry = unsafe { library.get::<BackendInitFn>( symbol.as_bytes() ) }
			.map_err(| err | LoadError::SymbolNotFound( symbol.to_string(), err ))?
			.pipe(| entry | *entry );

		// The module must outlive the entry pointer. Never unloaded.
		std::mem::forget( library );

		Ok( entry )
	}
}

/// Terminal state of a successful load: the entry symbol has been invoked
/// and the backend module owns the configuration object.
///
/// Carries the entry's own return code. A negative [`status`]( Self::status )
/// means the backend failed to initialize, but ownership of the
/// configuration has still transferred - don't retain or rebuild it.
#[derive( Debug )]
#[must_use = "the status code reports whether the backend initialized"]
pub struct LoadedBackend {
	status: c_int,
}

impl LoadedBackend {
	/// The entry symbol's return code: 0 success, negative failure.
	pub fn status( &self ) -> c_int { self.status }

	/// Whether the backend reported successful initialization.
	pub fn is_success( &self ) -> bool { self.status == 0 }
}

/// Resolves the DRM backend module and hands it the configuration object.
///
/// Resolution goes through `resolver` with the fixed
/// [`DRM_BACKEND_MODULE`] / [`BACKEND_INIT_SYMBOL`] names. On resolution
/// failure no invocation occurs and the configuration object is returned to
/// the caller inside the `Err` tuple, still valid and still the caller's to
/// drop. Once the entry is invoked the module owns the object; the returned
/// [`LoadedBackend`] carries the entry's status code.
///
/// `compositor` and `host_config` are opaque host handles forwarded
/// untouched; `args` must stay alive for the duration of the call (the
/// entry may consume options from it).
///
/// # Errors
/// Returns the [`LoadError`] and the configuration object if module or
/// symbol resolution fails.
pub fn load_drm_backend<R: ModuleResolver>(
	resolver: &R,
	compositor: *mut c_void,
	args: &mut BackendArgs,
	host_config: *mut c_void,
	config: Box<DrmBackendConfig>,
) -> Result<LoadedBackend, ( LoadError, Box<DrmBackendConfig> )> {

	let entry = match resolver.resolve( DRM_BACKEND_MODULE, BACKEND_INIT_SYMBOL ) {
		Ok( entry ) => entry,
		Err( err ) => {
			warn!( "backend resolution failed: {}", err );
			return Err(( err, config ));
		},
	};

	info!(
		"handing off to '{}': connector {}, tty {}, seat '{}', format '{}', outputs [{}]",
		DRM_BACKEND_MODULE,
		config.connector(),
		config.tty(),
		config.seat_id(),
		config.format(),
		config.outputs().iter().map( OutputConfig::name ).join( ", " ),
	);

	let config = Box::into_raw( config );
	// SAFETY: `config` came out of `Box::into_raw` above, so the base
	// pointer is valid and exclusively ours to hand over; the argc/argv
	// views live as long as `args`. The entry assumes ownership of the
	// configuration allocation, so it is not reclaimed here on any path.
	let status = unsafe {
		entry(
			compositor,
			args.argc_mut(),
			args.argv_mut(),
			host_config,
			( *config ).base_mut_ptr(),
		)
	};

	Ok( LoadedBackend { status })

}
