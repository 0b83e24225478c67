//! Resolution of a variable face's design space.

use core::fmt;

use bitflags::bitflags;

use crate::face::FaceSource;
use crate::string::NameId;
use crate::typeface::DesignCharacteristics;
use crate::{tag_from_bytes, Tag};
use crate::{TypeSlope, TypeWeight, TypeWidth};

// Axis tags that map onto the primary design characteristics.
const ITAL: Tag = tag_from_bytes(b"ital");
const SLNT: Tag = tag_from_bytes(b"slnt");
const WDTH: Tag = tag_from_bytes(b"wdth");
const WGHT: Tag = tag_from_bytes(b"wght");

/// Axis defaults and instance coordinates may come from different fixed
/// point encodings, so coordinate comparison tolerates one 16.16 unit.
pub(crate) const COORDINATE_EPSILON: f32 = 1.0 / 65536.0;

bitflags! {
    /// Flags of a variation axis record.
    #[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
    pub struct AxisFlags: u16 {
        /// The axis should not be exposed directly in user interfaces.
        const HIDDEN = 0x0001;
    }
}

/// Axis of variation in a variable face.
#[derive(Clone, PartialEq, Debug)]
pub struct VariationAxis {
    pub tag: Tag,
    pub name: String,
    pub flags: AxisFlags,
    pub default_value: f32,
    pub min_value: f32,
    pub max_value: f32,
}

impl fmt::Display for VariationAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = self.tag.to_be_bytes();
        let tag = core::str::from_utf8(&bytes).unwrap_or("");
        write!(
            f,
            "\"{}\" [{}, {}] default {}",
            tag, self.min_value, self.max_value, self.default_value
        )
    }
}

/// Named point in a variable face's design space.
#[derive(Clone, PartialEq, Debug)]
pub struct NamedStyle {
    pub style_name: String,
    pub coordinates: Vec<f32>,
    pub postscript_name: Option<String>,
}

/// Returns true if two coordinate vectors agree on every axis within the
/// fixed point epsilon.
pub(crate) fn coordinates_match(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() < COORDINATE_EPSILON)
}

/// Resolves the variation axes and named styles of a face.
///
/// Axes and instances keep their declaration order since every coordinate
/// vector is positional against the axis list. When no declared instance
/// sits on the axis defaults, a default instance is synthesized at index
/// zero carrying the face's intrinsic style name. A face without axis
/// records yields two empty lists.
pub fn resolve_variation_defaults(
    source: &dyn FaceSource,
) -> (Vec<VariationAxis>, Vec<NamedStyle>) {
    let axis_records = source.axis_records();
    if axis_records.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let axes: Vec<VariationAxis> = axis_records
        .into_iter()
        .map(|record| VariationAxis {
            tag: record.tag,
            name: resolve_name(source, record.name_id),
            flags: AxisFlags::from_bits_truncate(record.flags),
            default_value: record.default_value,
            min_value: record.min_value,
            max_value: record.max_value,
        })
        .collect();

    let default_coordinates: Vec<f32> = axes.iter().map(|axis| axis.default_value).collect();

    let mut styles = Vec::new();
    let mut has_default_instance = false;

    for record in source.instance_records() {
        if !has_default_instance
            && coordinates_match(&record.coordinates, &default_coordinates)
        {
            has_default_instance = true;
        }

        styles.push(NamedStyle {
            style_name: resolve_name(source, record.name_id),
            postscript_name: record
                .postscript_name_id
                .and_then(|id| source.name_string(id)),
            coordinates: record.coordinates,
        });
    }

    if !has_default_instance {
        tracing::debug!("no declared default instance, synthesizing one");
        styles.insert(
            0,
            NamedStyle {
                style_name: source.style_name().unwrap_or_default(),
                coordinates: default_coordinates,
                postscript_name: None,
            },
        );
    }

    (axes, styles)
}

/// Returns the first named style with a non empty name whose coordinates
/// match the given vector.
pub(crate) fn match_named_style<'a>(
    styles: &'a [NamedStyle],
    coordinates: &[f32],
) -> Option<&'a NamedStyle> {
    styles
        .iter()
        .filter(|style| !style.style_name.is_empty())
        .find(|style| coordinates_match(&style.coordinates, coordinates))
}

/// Derives the width, weight and slope selected by a coordinate vector.
/// Axes that do not map onto a primary characteristic leave the defaults
/// in place.
pub fn resolve_design_characteristics(
    coordinates: &[f32],
    axes: &[VariationAxis],
) -> (TypeWidth, TypeWeight, TypeSlope) {
    let mut design = DesignCharacteristics::default();
    apply_coordinates(&mut design, axes, coordinates);
    (design.width, design.weight, design.slope)
}

/// Updates the design characteristics from the active coordinates of the
/// recognized axes. Unknown tags are skipped; a duplicated tag simply
/// overwrites the previous value.
pub(crate) fn apply_coordinates(
    design: &mut DesignCharacteristics,
    axes: &[VariationAxis],
    coordinates: &[f32],
) {
    for (axis, value) in axes.iter().zip(coordinates) {
        match axis.tag {
            ITAL => design.slope = TypeSlope::from_ital(*value),
            SLNT => design.slope = TypeSlope::from_slnt(*value),
            WDTH => design.width = TypeWidth::from_wdth(*value),
            WGHT => design.weight = TypeWeight::from_wght(*value),
            _ => {}
        }
    }
}

fn resolve_name(source: &dyn FaceSource, id: NameId) -> String {
    source.name_string(id).unwrap_or_default()
}
