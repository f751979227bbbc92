//! Owned argument vector for the backend entry contract.
//!
//! The entry symbol takes the host's `int *argc, char **argv` pair and may
//! consume options from it. [`BackendArgs`] copies the caller's arguments
//! into NUL-terminated storage it owns (the same copy rule every string in
//! this crate follows) and exposes the mutable views the contract needs.

use std::ffi::{ c_char, c_int, CString, NulError };



/// An owned, NUL-terminated copy of the process argument vector.
///
/// Holds the storage for the whole call: the raw views handed to the entry
/// symbol stay valid exactly as long as this value lives, so keep it alive
/// across [`load_drm_backend`]( crate::load_drm_backend ).
#[derive( Debug )]
pub struct BackendArgs {
	// `pointers` aliases into `_storage`; neither may be touched while a raw
	// view is outstanding, which is why there are no setters.
	_storage: Vec<CString>,
	pointers: Vec<*mut c_char>,
	argc: c_int,
}

impl BackendArgs {

	/// Copies `args` into owned NUL-terminated storage.
	///
	/// # Errors
	/// Returns the [`NulError`] if an argument contains an interior NUL
	/// byte, which cannot be represented in a C argument vector.
	pub fn new<'a>( args: impl IntoIterator<Item = &'a str> ) -> Result<Self, NulError> {
		let storage = args.into_iter()
			.map( CString::new )
			.collect::<Result<Vec<_>, _>>()?;
		let pointers = storage.iter()
			.map(| arg | arg.as_ptr().cast_mut() )
			.collect::<Vec<_>>();
		#[allow( clippy::cast_possible_truncation, clippy::cast_possible_wrap )]
		let argc = pointers.len() as c_int ;
		Ok( Self { _storage: storage, pointers, argc })
	}

	/// Number of arguments currently in the vector.
	///
	/// Reads back the mutable count, so this reflects any consumption the
	/// entry symbol performed.
	pub fn len( &self ) -> usize {
		usize::try_from( self.argc ).unwrap_or( 0 )
	}

	/// Whether the vector is empty.
	pub fn is_empty( &self ) -> bool {
		self.argc == 0
	}

	/// The mutable argument count, as passed to the entry symbol.
	pub fn argc_mut( &mut self ) -> *mut c_int {
		&mut self.argc
	}

	/// The mutable argument vector, as passed to the entry symbol.
	pub fn argv_mut( &mut self ) -> *mut *mut c_char {
		self.pointers.as_mut_ptr()
	}

}
