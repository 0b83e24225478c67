use thiserror::Error;

/// Contract violations reported to the caller.
///
/// Absent features (a face without variation axes or palettes) are
/// expressed as `None`/empty values by the descriptor getters; only
/// requests that contradict the resolved metadata surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("this typeface does not support font variations")]
    NotVariable,

    #[error("expected {expected} design coordinates, got {actual}")]
    CoordinateCountMismatch { expected: usize, actual: usize },

    #[error("this typeface does not support color palettes")]
    NoColorPalettes,

    #[error("palette requires exactly {expected} colors, got {actual}")]
    ColorCountMismatch { expected: usize, actual: usize },

    #[error("a type family requires at least one typeface")]
    EmptyFamily,
}
