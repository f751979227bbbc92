//! Per-output override records.
//!
//! A [`DrmBackendConfig`]( crate::DrmBackendConfig ) carries global settings
//! for the whole backend; an [`OutputConfig`] overrides them for a single
//! connector, addressed by name (e.g. `"HDMI-A-1"`). Records are plain data:
//! the backend module resolves them itself when it brings connectors up, so
//! nothing about them leaks into the load-boundary ABI.

use thiserror::Error ;

use crate::transform::Transform ;



/// Errors rejected locally by the configuration builder.
#[derive( Error, Debug, Eq, PartialEq )]
pub enum ConfigError {
    /// Output scale factors must be positive; 0 would propagate a degenerate
    /// value into the backend's mode setup.
    #[error( "Invalid scale: 0 (output '{0}')" )] InvalidScale( String ),
}

/// How the backend picks a mode for an output.
#[derive( Copy, Clone, Debug, Default, Eq, Hash, PartialEq )]
pub enum OutputMode {
    /// The output is disabled.
    Off,
    /// Use the mode currently active on the connector.
    #[default]
    Current,
    /// Use the preferred mode. A modeline may be supplied via
    /// [`OutputConfig::with_modeline`] in the form `"WIDTHxHEIGHT"` or as a
    /// full modeline descriptor; if absent or invalid the backend falls back
    /// to the preferred available mode.
    Preferred,
}

impl std::fmt::Display for OutputMode {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        f.write_str( match self {
            Self::Off => "off",
            Self::Current => "current",
            Self::Preferred => "preferred",
        })
    }
}

/// A single connector's non-default settings.
///
/// Built with [`OutputConfig::new`] plus the `with_*` methods, then appended
/// to a configuration object with
/// [`DrmBackendConfig::add_output`]( crate::DrmBackendConfig::add_output ).
/// Once appended, the record is owned by that configuration object and lives
/// exactly as long as it does (or until
/// [`clear_outputs`]( crate::DrmBackendConfig::clear_outputs )).
///
/// `None` for `format` or `seat` means "inherit the configuration object's
/// value"; the backend resolves inheritance at initialization time.
#[must_use = "append the record with DrmBackendConfig::add_output"]
#[derive( Clone, Debug, Eq, PartialEq )]
pub struct OutputConfig {
    name: String,
    scale: u32,
    transform: Transform,
    format: Option<String>,
    seat: Option<String>,
    mode: OutputMode,
    modeline: Option<String>,
}

impl OutputConfig {

    /// Creates an override record for the named connector.
    ///
    /// `mode` defaults to [`OutputMode::Current`]; `format` and `seat`
    /// default to inheriting from the configuration object. The name is
    /// copied - the caller's buffer is never retained.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidScale`] if `scale` is 0.
    pub fn new( name: &str, scale: u32, transform: Transform ) -> Result<Self, ConfigError> {
        if scale == 0 {
            return Err( ConfigError::InvalidScale( name.to_string() ));
        }
        Ok( Self {
            name: name.to_string(),
            scale,
            transform,
            format: None,
            seat: None,
            mode: OutputMode::default(),
            modeline: None,
        })
    }

    /// Sets the pixel format for this output, overriding the configuration
    /// object's format. Valid values are the same as
    /// [`DrmBackendConfig::set_format`]( crate::DrmBackendConfig::set_format ).
    pub fn with_format( mut self, format: &str ) -> Self {
        self.format = Some( format.to_string() );
        self
    }

    /// Sets the seat for this output, overriding the configuration object's
    /// seat.
    pub fn with_seat( mut self, seat: &str ) -> Self {
        self.seat = Some( seat.to_string() );
        self
    }

    /// Sets the mode selection policy for this output.
    pub fn with_mode( mut self, mode: OutputMode ) -> Self {
        self.mode = mode ;
        self
    }

    /// Sets the modeline used under [`OutputMode::Preferred`].
    ///
    /// Accepted but inert under any other mode; the stored value only takes
    /// effect once the mode is also `Preferred`.
    pub fn with_modeline( mut self, modeline: &str ) -> Self {
        self.modeline = Some( modeline.to_string() );
        self
    }

    /// The connector name this record targets.
    pub fn name( &self ) -> &str { &self.name }

    /// The scale factor, guaranteed positive.
    pub fn scale( &self ) -> u32 { self.scale }

    /// The output transform.
    pub fn transform( &self ) -> Transform { self.transform }

    /// The pixel format override, or `None` to inherit.
    pub fn format( &self ) -> Option<&str> { self.format.as_deref() }

    /// The seat override, or `None` to inherit.
    pub fn seat( &self ) -> Option<&str> { self.seat.as_deref() }

    /// The mode selection policy.
    pub fn mode( &self ) -> OutputMode { self.mode }

    /// The modeline, if one was supplied.
    pub fn modeline( &self ) -> Option<&str> { self.modeline.as_deref() }

    /// Replaces the scale factor in place.
    ///
    /// In-place counterpart of the constructor argument, for records already
    /// appended to a configuration object. The record's name is stable; there
    /// is deliberately no setter for it.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidScale`] if `scale` is 0; the stored
    /// value is left unchanged.
    pub fn set_scale( &mut self, scale: u32 ) -> Result<(), ConfigError> {
        if scale == 0 {
            return Err( ConfigError::InvalidScale( self.name.clone() ));
        }
        self.scale = scale ;
        Ok(())
    }

    /// Replaces the transform in place.
    pub fn set_transform( &mut self, transform: Transform ) {
        self.transform = transform ;
    }

    /// Replaces the pixel format override in place; `None` inherits.
    pub fn set_format( &mut self, format: Option<&str> ) {
        self.format = format.map( str::to_string );
    }

    /// Replaces the seat override in place; `None` inherits.
    pub fn set_seat( &mut self, seat: Option<&str> ) {
        self.seat = seat.map( str::to_string );
    }

    /// Replaces the mode selection policy in place.
    pub fn set_mode( &mut self, mode: OutputMode ) {
        self.mode = mode ;
    }

    /// Replaces the modeline in place.
    pub fn set_modeline( &mut self, modeline: Option<&str> ) {
        self.modeline = modeline.map( str::to_string );
    }

}
