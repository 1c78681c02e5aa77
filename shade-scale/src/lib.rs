//! Shade palettes derived from a single base color.
//!
//! [`generate_palette`] turns a `#rrggbb` string into an eleven step scale
//! (`50` through `950`) by mixing the color toward white for the light steps
//! and toward black for the dark ones. Input that is not a six digit hex color
//! produces a fixed slate palette instead of an error.

pub mod hex;
pub mod mix;
pub mod scale;
pub mod tokens;

pub use hex::{HexParseError, Rgb, parse_hex};
pub use mix::mix;
pub use scale::{FALLBACK_SHADES, Palette, Step, generate_palette, try_generate_palette};
