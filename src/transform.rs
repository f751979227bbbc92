//! Output transform values.
//!
//! A transform describes the rotation/flip the backend applies when scanning
//! out an output. The discriminants are part of the frozen
//! [`BackendConfigBase`]( crate::BackendConfigBase ) layout, so the enum is
//! `#[repr( u32 )]` and the values are never reordered.

/// Rotation/flip applied to an output.
///
/// The value set mirrors the wayland output model: four rotations, and the
/// same four rotations combined with a horizontal flip.
#[repr( u32 )]
#[derive( Copy, Clone, Debug, Default, Eq, Hash, PartialEq )]
pub enum Transform {
	/// No transform.
	#[default]
	Normal = 0,
	/// 90 degrees counter-clockwise.
	Rotate90 = 1,
	/// 180 degrees counter-clockwise.
	Rotate180 = 2,
	/// 270 degrees counter-clockwise.
	Rotate270 = 3,
	/// Flipped around the vertical axis.
	Flipped = 4,
	/// Flipped, then rotated 90 degrees counter-clockwise.
	Flipped90 = 5,
	/// Flipped, then rotated 180 degrees counter-clockwise.
	Flipped180 = 6,
	/// Flipped, then rotated 270 degrees counter-clockwise.
	Flipped270 = 7,
}

impl std::fmt::Display for Transform {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
		f.write_str( match self {
			Self::Normal => "normal",
			Self::Rotate90 => "90",
			Self::Rotate180 => "180",
			Self::Rotate270 => "270",
			Self::Flipped => "flipped",
			Self::Flipped90 => "flipped-90",
			Self::Flipped180 => "flipped-180",
			Self::Flipped270 => "flipped-270",
		})
	}
}
