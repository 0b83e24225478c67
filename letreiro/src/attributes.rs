//! Typographic classification of a face: width, weight and slope.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Style bits from the OS/2 `fsSelection` field that affect slope
    /// classification.
    #[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
    pub struct SelectionFlags: u16 {
        const ITALIC = 1;
        const OBLIQUE = 1 << 9;
    }
}

/// Visual width of a face, from most condensed to most expanded.
///
/// The discriminant order matches the OS/2 `usWidthClass` scale, so the
/// enum is totally ordered and each variant has a stable rank used by the
/// family matcher.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TypeWidth {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl TypeWidth {
    /// Returns the zero based rank of this width on the condensed to
    /// expanded scale.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns the OS/2 `usWidthClass` value of this width, from 1 to 9.
    pub fn value(self) -> u16 {
        self as u16 + 1
    }

    /// Returns the percentage of normal this width represents, as used by
    /// the `wdth` variation axis.
    pub fn to_percentage(self) -> f32 {
        [50.0, 62.5, 75.0, 87.5, 100.0, 112.5, 125.0, 150.0, 200.0][self as usize]
    }

    /// Classifies an OS/2 `usWidthClass` value. Out of range values map to
    /// [`TypeWidth::Normal`].
    pub fn from_width_class(value: u16) -> Self {
        match value {
            1 => Self::UltraCondensed,
            2 => Self::ExtraCondensed,
            3 => Self::Condensed,
            4 => Self::SemiCondensed,
            5 => Self::Normal,
            6 => Self::SemiExpanded,
            7 => Self::Expanded,
            8 => Self::ExtraExpanded,
            9 => Self::UltraExpanded,
            _ => Self::Normal,
        }
    }

    /// Classifies a continuous `wdth` axis percentage into the nearest
    /// width bucket. Breakpoints sit at the midpoints between the standard
    /// percentages, so the mapping is monotonic.
    pub fn from_wdth(wdth: f32) -> Self {
        if wdth < 56.25 {
            Self::UltraCondensed
        } else if wdth < 68.75 {
            Self::ExtraCondensed
        } else if wdth < 81.25 {
            Self::Condensed
        } else if wdth < 93.75 {
            Self::SemiCondensed
        } else if wdth < 106.25 {
            Self::Normal
        } else if wdth < 118.75 {
            Self::SemiExpanded
        } else if wdth < 137.5 {
            Self::Expanded
        } else if wdth < 175.0 {
            Self::ExtraExpanded
        } else {
            Self::UltraExpanded
        }
    }
}

impl Default for TypeWidth {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for TypeWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::UltraCondensed => "ultra-condensed",
                Self::ExtraCondensed => "extra-condensed",
                Self::Condensed => "condensed",
                Self::SemiCondensed => "semi-condensed",
                Self::Normal => "normal",
                Self::SemiExpanded => "semi-expanded",
                Self::Expanded => "expanded",
                Self::ExtraExpanded => "extra-expanded",
                Self::UltraExpanded => "ultra-expanded",
            }
        )
    }
}

/// Visual weight of a face over the standard 100 to 900 buckets.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TypeWeight {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Heavy,
}

impl TypeWeight {
    /// Returns the zero based rank of this weight on the thin to heavy
    /// scale.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns the numeric weight class of this weight, from 100 to 900.
    pub fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Classifies an OS/2 `usWeightClass` value into the nearest weight
    /// bucket.
    pub fn from_weight_class(value: u16) -> Self {
        Self::from_wght(value as f32)
    }

    /// Classifies a continuous `wght` axis value into the nearest weight
    /// bucket. The value is clamped to the 1 to 1000 range; breakpoints
    /// sit halfway between buckets, so the mapping is monotonic.
    pub fn from_wght(wght: f32) -> Self {
        let wght = wght.clamp(1.0, 1000.0);
        if wght < 150.0 {
            Self::Thin
        } else if wght < 250.0 {
            Self::ExtraLight
        } else if wght < 350.0 {
            Self::Light
        } else if wght < 450.0 {
            Self::Regular
        } else if wght < 550.0 {
            Self::Medium
        } else if wght < 650.0 {
            Self::SemiBold
        } else if wght < 750.0 {
            Self::Bold
        } else if wght < 850.0 {
            Self::ExtraBold
        } else {
            Self::Heavy
        }
    }
}

impl Default for TypeWeight {
    fn default() -> Self {
        Self::Regular
    }
}

impl fmt::Display for TypeWeight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Thin => "thin",
                Self::ExtraLight => "extra-light",
                Self::Light => "light",
                Self::Regular => "regular",
                Self::Medium => "medium",
                Self::SemiBold => "semi-bold",
                Self::Bold => "bold",
                Self::ExtraBold => "extra-bold",
                Self::Heavy => "heavy",
            }
        )
    }
}

/// Slant of a face: upright, italic or obliqued.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TypeSlope {
    Plain,
    Italic,
    Oblique,
}

impl TypeSlope {
    /// Returns the zero based rank of this slope.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Classifies an `ital` axis value. Values of one or greater select
    /// the italic design.
    pub fn from_ital(ital: f32) -> Self {
        if ital >= 1.0 {
            Self::Italic
        } else {
            Self::Plain
        }
    }

    /// Classifies a `slnt` axis angle. Any non zero slant is oblique.
    pub fn from_slnt(slnt: f32) -> Self {
        if slnt != 0.0 {
            Self::Oblique
        } else {
            Self::Plain
        }
    }

    /// Classifies the OS/2 selection flags of a non variable face.
    pub fn from_selection_flags(flags: SelectionFlags) -> Self {
        if flags.contains(SelectionFlags::ITALIC) {
            Self::Italic
        } else if flags.contains(SelectionFlags::OBLIQUE) {
            Self::Oblique
        } else {
            Self::Plain
        }
    }
}

impl Default for TypeSlope {
    fn default() -> Self {
        Self::Plain
    }
}

impl fmt::Display for TypeSlope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Plain => "plain",
                Self::Italic => "italic",
                Self::Oblique => "oblique",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_buckets_from_wdth() {
        assert_eq!(TypeWidth::from_wdth(25.0), TypeWidth::UltraCondensed);
        assert_eq!(TypeWidth::from_wdth(62.5), TypeWidth::ExtraCondensed);
        assert_eq!(TypeWidth::from_wdth(100.0), TypeWidth::Normal);
        assert_eq!(TypeWidth::from_wdth(112.5), TypeWidth::SemiExpanded);
        assert_eq!(TypeWidth::from_wdth(150.0), TypeWidth::ExtraExpanded);
        assert_eq!(TypeWidth::from_wdth(200.0), TypeWidth::UltraExpanded);
    }

    #[test]
    fn width_from_wdth_is_monotonic() {
        let mut last = TypeWidth::UltraCondensed;
        for step in 0..400 {
            let width = TypeWidth::from_wdth(step as f32);
            assert!(width >= last, "regressed at wdth={step}");
            last = width;
        }
    }

    #[test]
    fn weight_buckets_from_wght() {
        assert_eq!(TypeWeight::from_wght(-20.0), TypeWeight::Thin);
        assert_eq!(TypeWeight::from_wght(100.0), TypeWeight::Thin);
        assert_eq!(TypeWeight::from_wght(149.9), TypeWeight::Thin);
        assert_eq!(TypeWeight::from_wght(150.0), TypeWeight::ExtraLight);
        assert_eq!(TypeWeight::from_wght(400.0), TypeWeight::Regular);
        assert_eq!(TypeWeight::from_wght(449.0), TypeWeight::Regular);
        assert_eq!(TypeWeight::from_wght(450.0), TypeWeight::Medium);
        assert_eq!(TypeWeight::from_wght(900.0), TypeWeight::Heavy);
        assert_eq!(TypeWeight::from_wght(2000.0), TypeWeight::Heavy);
    }

    #[test]
    fn weight_from_wght_is_monotonic() {
        let mut last = TypeWeight::Thin;
        for step in 0..1100 {
            let weight = TypeWeight::from_wght(step as f32);
            assert!(weight >= last, "regressed at wght={step}");
            last = weight;
        }
    }

    #[test]
    fn weight_values_round_trip() {
        for rank in 0..9u16 {
            let weight = TypeWeight::from_weight_class((rank + 1) * 100);
            assert_eq!(weight.rank(), rank as usize);
            assert_eq!(weight.value(), (rank + 1) * 100);
        }
    }

    #[test]
    fn slope_from_axes() {
        assert_eq!(TypeSlope::from_ital(0.0), TypeSlope::Plain);
        assert_eq!(TypeSlope::from_ital(1.0), TypeSlope::Italic);
        assert_eq!(TypeSlope::from_slnt(0.0), TypeSlope::Plain);
        assert_eq!(TypeSlope::from_slnt(-12.0), TypeSlope::Oblique);
        assert_eq!(TypeSlope::from_slnt(8.0), TypeSlope::Oblique);
    }

    #[test]
    fn slope_from_selection_flags() {
        assert_eq!(
            TypeSlope::from_selection_flags(SelectionFlags::empty()),
            TypeSlope::Plain
        );
        assert_eq!(
            TypeSlope::from_selection_flags(SelectionFlags::ITALIC),
            TypeSlope::Italic
        );
        assert_eq!(
            TypeSlope::from_selection_flags(SelectionFlags::OBLIQUE),
            TypeSlope::Oblique
        );
        // The italic bit wins when a font sets both.
        assert_eq!(
            TypeSlope::from_selection_flags(
                SelectionFlags::ITALIC | SelectionFlags::OBLIQUE
            ),
            TypeSlope::Italic
        );
    }
}
