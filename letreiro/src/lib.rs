//! Resolution of font descriptors from raw font metadata.
//!
//! Given a face's variation, palette and naming tables (supplied already
//! materialized by a [`FaceSource`] collaborator), this crate resolves a
//! concrete, renderable [`Typeface`]: its design characteristics (width,
//! weight, slope), its variable design space (axes and named styles), and
//! its active color palette. [`TypeFamily`] then answers family-level style
//! queries over a set of resolved typefaces using the CSS font matching
//! rules.
//!
//! Parsing font files, shaping and rasterization are out of scope; the
//! collaborator that reads the underlying tables owns those concerns.

mod attributes;
mod error;
mod face;
mod family;
mod palette;
mod string;
mod typeface;
mod variation;

pub use attributes::{SelectionFlags, TypeSlope, TypeWeight, TypeWidth};
pub use error::Error;
pub use face::{AxisRecord, FaceSource, InstanceRecord, PaletteData};
pub use family::TypeFamily;
pub use palette::{resolve_palette_defaults, Color, ColorPalette, PaletteFlags};
pub use string::NameId;
pub use typeface::Typeface;
pub use variation::{
    resolve_design_characteristics, resolve_variation_defaults, AxisFlags, NamedStyle,
    VariationAxis,
};

/// Four byte table or axis tag.
pub type Tag = u32;

/// Creates a tag from four bytes.
pub const fn tag_from_bytes(bytes: &[u8; 4]) -> Tag {
    u32::from_be_bytes(*bytes)
}
