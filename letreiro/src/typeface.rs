//! The resolved font descriptor.

use core::fmt;
use std::sync::{Arc, OnceLock};

use crate::attributes::{TypeSlope, TypeWeight, TypeWidth};
use crate::error::Error;
use crate::face::FaceSource;
use crate::palette::{resolve_palette_defaults, Color, ColorPalette};
use crate::variation::{
    apply_coordinates, match_named_style, resolve_variation_defaults, NamedStyle,
    VariationAxis,
};

/// Primary design characteristics of a face.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub(crate) struct DesignCharacteristics {
    pub width: TypeWidth,
    pub weight: TypeWeight,
    pub slope: TypeSlope,
}

#[derive(Clone, PartialEq, Default, Debug)]
struct StandardNames {
    family_name: String,
    style_name: String,
    full_name: String,
}

impl StandardNames {
    /// Rebuilds the full name from the family and style names.
    fn regenerate_full_name(&mut self) {
        let family = self.family_name.trim();
        if family.is_empty() {
            self.full_name = self.style_name.clone();
        } else if self.style_name.is_empty() {
            self.full_name = family.to_owned();
        } else {
            self.full_name = format!("{} {}", family, self.style_name);
        }
    }
}

/// Properties resolved once per root face and shared by every variation
/// and color derivative.
pub(crate) struct DefaultProperties {
    variation_axes: Vec<VariationAxis>,
    named_styles: Vec<NamedStyle>,
    palette_entry_names: Vec<String>,
    predefined_palettes: Vec<ColorPalette>,
}

/// The root face and its lazily resolved defaults. Derivatives hold the
/// same allocation and never re-resolve the underlying tables.
struct FaceData {
    source: Box<dyn FaceSource>,
    defaults: OnceLock<DefaultProperties>,
}

impl FaceData {
    fn defaults(&self) -> &DefaultProperties {
        self.defaults.get_or_init(|| {
            let source = self.source.as_ref();
            let (variation_axes, named_styles) = resolve_variation_defaults(source);
            let (palette_entry_names, predefined_palettes) =
                resolve_palette_defaults(source).unwrap_or_default();
            tracing::debug!(
                "resolved face defaults: {} axes, {} named styles, {} palettes",
                variation_axes.len(),
                named_styles.len(),
                predefined_palettes.len()
            );
            DefaultProperties {
                variation_axes,
                named_styles,
                palette_entry_names,
                predefined_palettes,
            }
        })
    }
}

/// A concrete, renderable variant of a face.
///
/// A typeface is an immutable snapshot: its design characteristics, names,
/// active design coordinates and active palette colors are fixed at
/// construction. Selecting other coordinates or colors produces a new
/// typeface via [`variation_instance`](Typeface::variation_instance) or
/// [`color_instance`](Typeface::color_instance); all derivatives of the
/// same root share one resolved set of default properties.
pub struct Typeface {
    face: Arc<FaceData>,
    design: DesignCharacteristics,
    names: StandardNames,
    coordinates: Vec<f32>,
    colors: Vec<Color>,
}

impl Typeface {
    /// Resolves a typeface from the given metadata source.
    ///
    /// The default design coordinates (the axis defaults) and the first
    /// predefined palette, when present, become the active state.
    pub fn new(source: impl FaceSource + 'static) -> Self {
        let face = Arc::new(FaceData {
            source: Box::new(source),
            defaults: OnceLock::new(),
        });
        let defaults = face.defaults();
        let coordinates: Vec<f32> = defaults
            .variation_axes
            .iter()
            .map(|axis| axis.default_value)
            .collect();
        let colors = defaults
            .predefined_palettes
            .first()
            .map(|palette| palette.colors.clone())
            .unwrap_or_default();
        Self::with_state(Arc::clone(&face), coordinates, colors)
    }

    fn with_state(face: Arc<FaceData>, coordinates: Vec<f32>, colors: Vec<Color>) -> Self {
        let source = face.source.as_ref();

        let mut design = DesignCharacteristics {
            width: TypeWidth::from_width_class(source.width_class()),
            weight: TypeWeight::from_weight_class(source.weight_class()),
            slope: TypeSlope::from_selection_flags(source.selection_flags()),
        };

        let mut names = StandardNames {
            family_name: source.family_name().unwrap_or_default(),
            style_name: source.style_name().unwrap_or_default(),
            full_name: String::new(),
        };
        match source.full_name() {
            Some(full_name) => names.full_name = full_name,
            None => names.regenerate_full_name(),
        }

        if !coordinates.is_empty() {
            let defaults = face.defaults();
            if !defaults.named_styles.is_empty() {
                names.style_name = match_named_style(&defaults.named_styles, &coordinates)
                    .map(|style| style.style_name.clone())
                    .unwrap_or_default();
                names.regenerate_full_name();
            }
            apply_coordinates(&mut design, &defaults.variation_axes, &coordinates);
        }

        Self {
            face,
            design,
            names,
            coordinates,
            colors,
        }
    }

    /// Returns true if this typeface supports font variations.
    pub fn is_variable(&self) -> bool {
        !self.face.defaults().variation_axes.is_empty()
    }

    /// Returns the variation axes, if the face is variable.
    pub fn variation_axes(&self) -> Option<&[VariationAxis]> {
        let axes = &self.face.defaults().variation_axes;
        (!axes.is_empty()).then_some(axes.as_slice())
    }

    /// Returns the named styles, if the face is variable. The list always
    /// contains the default instance, synthesized when the face does not
    /// declare one.
    pub fn named_styles(&self) -> Option<&[NamedStyle]> {
        let styles = &self.face.defaults().named_styles;
        (!styles.is_empty()).then_some(styles.as_slice())
    }

    /// Returns the active design coordinates, one per axis, if the face is
    /// variable.
    pub fn variation_coordinates(&self) -> Option<&[f32]> {
        (!self.coordinates.is_empty()).then_some(self.coordinates.as_slice())
    }

    /// Returns a variant of this typeface at the given design coordinates.
    pub fn variation_instance(&self, coordinates: &[f32]) -> Result<Typeface, Error> {
        let axes = self.variation_axes().ok_or(Error::NotVariable)?;
        if coordinates.len() != axes.len() {
            return Err(Error::CoordinateCountMismatch {
                expected: axes.len(),
                actual: coordinates.len(),
            });
        }
        Ok(Self::with_state(
            Arc::clone(&self.face),
            coordinates.to_vec(),
            self.colors.clone(),
        ))
    }

    /// Returns the names of the palette entries, if the face has color
    /// palettes.
    pub fn palette_entry_names(&self) -> Option<&[String]> {
        let names = &self.face.defaults().palette_entry_names;
        (!names.is_empty()).then_some(names.as_slice())
    }

    /// Returns the predefined palettes, if the face has color palettes.
    pub fn predefined_palettes(&self) -> Option<&[ColorPalette]> {
        let palettes = &self.face.defaults().predefined_palettes;
        (!palettes.is_empty()).then_some(palettes.as_slice())
    }

    /// Returns the active palette colors, if the face has color palettes.
    pub fn associated_colors(&self) -> Option<&[Color]> {
        (!self.colors.is_empty()).then_some(self.colors.as_slice())
    }

    /// Returns a variant of this typeface with the given palette colors.
    /// The slice must hold exactly one color per palette entry.
    pub fn color_instance(&self, colors: &[Color]) -> Result<Typeface, Error> {
        let entry_names = self.palette_entry_names().ok_or(Error::NoColorPalettes)?;
        if colors.len() != entry_names.len() {
            return Err(Error::ColorCountMismatch {
                expected: entry_names.len(),
                actual: colors.len(),
            });
        }
        Ok(Self {
            face: Arc::clone(&self.face),
            design: self.design,
            names: self.names.clone(),
            coordinates: self.coordinates.clone(),
            colors: colors.to_vec(),
        })
    }

    /// Returns the family name of this typeface.
    pub fn family_name(&self) -> &str {
        &self.names.family_name
    }

    /// Returns the style name of this typeface.
    pub fn style_name(&self) -> &str {
        &self.names.style_name
    }

    /// Returns the full name of this typeface.
    pub fn full_name(&self) -> &str {
        &self.names.full_name
    }

    /// Returns the typographic width of this typeface.
    pub fn width(&self) -> TypeWidth {
        self.design.width
    }

    /// Returns the typographic weight of this typeface.
    pub fn weight(&self) -> TypeWeight {
        self.design.weight
    }

    /// Returns the typographic slope of this typeface.
    pub fn slope(&self) -> TypeSlope {
        self.design.slope
    }
}

impl Clone for Typeface {
    fn clone(&self) -> Self {
        Self {
            face: Arc::clone(&self.face),
            design: self.design,
            names: self.names.clone(),
            coordinates: self.coordinates.clone(),
            colors: self.colors.clone(),
        }
    }
}

impl PartialEq for Typeface {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.face, &other.face)
            && self.design == other.design
            && self.names == other.names
            && self.coordinates == other.coordinates
            && self.colors == other.colors
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Typeface")
            .field("family_name", &self.names.family_name)
            .field("style_name", &self.names.style_name)
            .field("full_name", &self.names.full_name)
            .field("width", &self.design.width)
            .field("weight", &self.design.weight)
            .field("slope", &self.design.slope)
            .field("coordinates", &self.coordinates)
            .finish()
    }
}
