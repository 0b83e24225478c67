//! Families of related typefaces and style based selection.

use core::fmt;

use crate::attributes::{TypeSlope, TypeWeight, TypeWidth};
use crate::error::Error;
use crate::typeface::Typeface;

// Preference tables from the CSS font matching algorithm. Rows are the
// desired value, columns the candidate; lower is a better match. The
// tables are data, not a formula: they must not be re-derived from rank
// distance.

// Desired `plain`: plain faces first, then oblique, then italic.
// Desired `italic`: italic first, then oblique, then plain.
// Desired `oblique`: oblique first, then italic, then plain.
const SLOPE_GAPS: [i32; 9] = [
    /*   plain: */ 0, 2, 1, //
    /*  italic: */ 2, 0, 1, //
    /* oblique: */ 2, 1, 0,
];

// Below 400: descending first, then ascending. At 400: 500 first, then the
// below-400 rule. At 500: 400 first, then the below-400 rule. Above 500:
// ascending first, then descending.
const WEIGHT_GAPS: [i32; 81] = [
    /* 100: */ 0, 1, 2, 3, 4, 5, 6, 7, 8, //
    /* 200: */ 1, 0, 2, 3, 4, 5, 6, 7, 8, //
    /* 300: */ 2, 1, 0, 3, 4, 5, 6, 7, 8, //
    /* 400: */ 4, 3, 2, 0, 1, 5, 6, 7, 8, //
    /* 500: */ 4, 3, 2, 1, 0, 5, 6, 7, 8, //
    /* 600: */ 8, 7, 6, 5, 4, 0, 1, 2, 3, //
    /* 700: */ 8, 7, 6, 5, 4, 3, 0, 1, 2, //
    /* 800: */ 8, 7, 6, 5, 4, 3, 2, 0, 1, //
    /* 900: */ 8, 7, 6, 5, 4, 3, 2, 1, 0,
];

fn width_gap(desired: TypeWidth, candidate: TypeWidth) -> i32 {
    (desired.rank() as i32 - candidate.rank() as i32).abs()
}

fn slope_gap(desired: TypeSlope, candidate: TypeSlope) -> i32 {
    SLOPE_GAPS[desired.rank() * 3 + candidate.rank()]
}

fn weight_gap(desired: TypeWeight, candidate: TypeWeight) -> i32 {
    WEIGHT_GAPS[desired.rank() * 9 + candidate.rank()]
}

/// A collection of typefaces that relate to each other.
#[derive(Clone, PartialEq)]
pub struct TypeFamily {
    family_name: String,
    typefaces: Vec<Typeface>,
}

impl TypeFamily {
    /// Creates a family from a non empty list of typefaces sharing the
    /// given family name.
    pub fn new(
        family_name: impl Into<String>,
        typefaces: Vec<Typeface>,
    ) -> Result<Self, Error> {
        if typefaces.is_empty() {
            return Err(Error::EmptyFamily);
        }
        Ok(Self {
            family_name: family_name.into(),
            typefaces,
        })
    }

    /// Returns the name of this family.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Returns the typefaces belonging to this family.
    pub fn typefaces(&self) -> &[Typeface] {
        &self.typefaces
    }

    /// Returns the member best matching the desired width, weight and
    /// slope, following the CSS font matching algorithm.
    ///
    /// The scan is a three level lexicographic minimization over the gap
    /// tables, evaluated width first, then slope, then weight. A later
    /// member replaces the running best only when it is not a strictly
    /// worse match at any level, so ties keep the earliest member.
    pub fn typeface_by_style(
        &self,
        width: TypeWidth,
        weight: TypeWeight,
        slope: TypeSlope,
    ) -> &Typeface {
        let mut best = &self.typefaces[0];

        for current in &self.typefaces[1..] {
            let width_delta =
                width_gap(width, current.width()) - width_gap(width, best.width());
            if width_delta > 0 {
                continue;
            }

            let slope_delta =
                slope_gap(slope, current.slope()) - slope_gap(slope, best.slope());
            if slope_delta > 0 {
                continue;
            }

            let weight_delta =
                weight_gap(weight, current.weight()) - weight_gap(weight, best.weight());
            if weight_delta > 0 {
                continue;
            }

            best = current;
        }

        tracing::trace!(
            "matched \"{}\" for {width}/{weight}/{slope} in family \"{}\"",
            best.full_name(),
            self.family_name
        );
        best
    }
}

impl fmt::Debug for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TypeFamily")
            .field("family_name", &self.family_name)
            .field("typefaces", &self.typefaces)
            .finish()
    }
}
