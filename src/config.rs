//! The backend configuration object and its ABI-stable header.
//!
//! A [`DrmBackendConfig`] is the heap-owned value a compositor frontend
//! builds up and then hands off - with ownership - to the backend module via
//! [`load_drm_backend`]( crate::load_drm_backend ). Everything reachable
//! from it (the seat and format strings, every override record) is owned by
//! it exclusively and released when it drops.
//!
//! The [`BackendConfigBase`] header is the only part of the struct the
//! loader and the loaded module are contractually required to understand
//! identically. It sits first in the struct under `#[repr( C )]`, so a
//! module built against the same header version can upcast the base pointer
//! it receives to the full configuration, while older or foreign modules
//! only ever touch the frozen prefix. Backend-specific fields live after it
//! and may change freely between versions.

use crate::output::OutputConfig ;
use crate::transform::Transform ;

/// Seat used when none is configured.
pub const DEFAULT_SEAT: &str = "seat0" ;
/// Framebuffer pixel format used when none is configured.
pub const DEFAULT_FORMAT: &str = "xrgb8888" ;



/// The frozen, version-independent view of a backend configuration.
///
/// Both sides of the load boundary see this layout; nothing here may be
/// reordered, resized, or removed. It carries the defaults every loadable
/// module version must agree on: the scale and transform applied to outputs
/// that have no override record.
#[repr( C )]
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub struct BackendConfigBase {
	/// Default scale factor for outputs without an override.
	pub scale: u32,
	/// Default transform for outputs without an override.
	pub transform: Transform,
}

/// The DRM backend configuration object.
///
/// Created with [`new`]( Self::new ), populated through the setters, then
/// consumed by [`load_drm_backend`]( crate::load_drm_backend ). Mutable only
/// until that handoff: on a successful load the module owns the object and
/// frees it on its own destroy path; on a resolution failure the object
/// comes back to the caller untouched.
///
/// Every string passed to a setter is copied - the caller's buffer is never
/// retained and never freed by the object. `seat_id` and `format` are never
/// empty: clearing either resets it to [`DEFAULT_SEAT`] / [`DEFAULT_FORMAT`].
///
/// `base` must stay the first field; the loaded module recovers the full
/// struct from the base pointer it is handed (see the module docs).
#[repr( C )]
#[derive( Clone, Debug )]
pub struct DrmBackendConfig {
	base: BackendConfigBase,
	connector: u32,
	tty: u32,
	use_pixman: bool,
	use_current_mode: bool,
	seat_id: String,
	format: String,
	outputs: Vec<OutputConfig>,
}

impl Default for DrmBackendConfig {
	fn default() -> Self {
		Self {
			base: BackendConfigBase { scale: 1, transform: Transform::Normal },
			connector: 0,
			tty: 0,
			use_pixman: false,
			use_current_mode: false,
			seat_id: DEFAULT_SEAT.to_string(),
			format: DEFAULT_FORMAT.to_string(),
			outputs: Vec::with_capacity( 0 ),
		}
	}
}

impl DrmBackendConfig {

	/// Creates a configuration object with the default settings.
	///
	/// Defaults: `connector = 0` (all available outputs), `tty = 0` (current
	/// tty), software rendering off, mode negotiation on, seat
	/// [`DEFAULT_SEAT`], format [`DEFAULT_FORMAT`], no override records.
	///
	/// Heap-owned from birth: the object's destiny is a pointer handoff to
	/// the backend module, so it never lives on the stack.
	pub fn new() -> Box<Self> {
		Box::new( Self::default() )
	}

	/// Sets the connector id of the output to be initialized.
	/// 0 enables all available outputs.
	pub fn set_connector( &mut self, connector: u32 ) {
		self.connector = connector ;
	}

	/// Sets the tty to be used. 0 uses the current tty.
	pub fn set_tty( &mut self, tty: u32 ) {
		self.tty = tty ;
	}

	/// If true the pixman renderer will be used instead of the OpenGL ES
	/// renderer.
	pub fn set_use_pixman( &mut self, use_pixman: bool ) {
		self.use_pixman = use_pixman ;
	}

	/// If true the backend reuses the currently active mode on each output
	/// instead of negotiating one.
	pub fn set_use_current_mode( &mut self, use_current_mode: bool ) {
		self.use_current_mode = use_current_mode ;
	}

	/// Sets the seat to be used for input and output.
	///
	/// The string is copied. `None` or an empty string resets to
	/// [`DEFAULT_SEAT`].
	pub fn set_seat_id( &mut self, seat_id: Option<&str> ) {
		self.seat_id = match seat_id {
			Some( seat_id ) if !seat_id.is_empty() => seat_id.to_string(),
			_ => DEFAULT_SEAT.to_string(),
		};
	}

	/// Sets the pixel format of the framebuffer. Valid values are
	/// `"xrgb8888"`, `"rgb565"` and `"xrgb2101010"`.
	///
	/// The string is copied. `None` or an empty string resets to
	/// [`DEFAULT_FORMAT`].
	pub fn set_format( &mut self, format: Option<&str> ) {
		self.format = match format {
			Some( format ) if !format.is_empty() => format.to_string(),
			_ => DEFAULT_FORMAT.to_string(),
		};
	}

	/// Sets the default scale for outputs without an override record.
	/// Part of the frozen [`BackendConfigBase`] view.
	pub fn set_default_scale( &mut self, scale: u32 ) {
		self.base.scale = scale ;
	}

	/// Sets the default transform for outputs without an override record.
	/// Part of the frozen [`BackendConfigBase`] view.
	pub fn set_default_transform( &mut self, transform: Transform ) {
		self.base.transform = transform ;
	}

	/// Appends an override record, in call order.
	///
	/// Returns a handle to the appended record for further in-place
	/// field-setting. Duplicate connector names are allowed and preserved;
	/// the backend module resolves names itself at initialization time.
	pub fn add_output( &mut self, output: OutputConfig ) -> &mut OutputConfig {
		self.outputs.push( output );
		self.outputs.last_mut().unwrap()
	}

	/// Drops every override record. The configuration object itself
	/// survives and stays usable.
	pub fn clear_outputs( &mut self ) {
		self.outputs.clear();
	}

	/// The frozen header view. See the module docs for the layout contract.
	pub fn base( &self ) -> &BackendConfigBase { &self.base }

	/// Pointer to the frozen header, as passed across the load boundary.
	pub(crate) fn base_mut_ptr( &mut self ) -> *mut BackendConfigBase { &mut self.base }

	/// The connector id, 0 meaning all available outputs.
	pub fn connector( &self ) -> u32 { self.connector }

	/// The tty number, 0 meaning the current tty.
	pub fn tty( &self ) -> u32 { self.tty }

	/// Whether the pixman renderer is selected.
	pub fn use_pixman( &self ) -> bool { self.use_pixman }

	/// Whether the currently active mode is reused.
	pub fn use_current_mode( &self ) -> bool { self.use_current_mode }

	/// The seat, never empty.
	pub fn seat_id( &self ) -> &str { &self.seat_id }

	/// The framebuffer pixel format, never empty.
	pub fn format( &self ) -> &str { &self.format }

	/// The override records, in insertion order.
	pub fn outputs( &self ) -> &[OutputConfig] { &self.outputs }

}
