//! Shared UI atoms for destination pickers.

pub mod destination_button;
pub mod icons;

pub use destination_button::{DestinationButton, DestinationButtonProps, PLACEHOLDER_MARKER};
pub use icons::{Glyph, IconProps, IconVariant, glyphs};
