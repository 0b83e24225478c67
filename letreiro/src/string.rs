//! Identifiers for strings in a face's naming table.

/// Identifier of an entry in a face's naming table.
///
/// The resolvers only ever look names up by id; the actual string storage
/// and platform/encoding selection belong to the [`FaceSource`]
/// collaborator.
///
/// [`FaceSource`]: crate::FaceSource
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NameId(pub u16);

impl NameId {
    pub const FAMILY: Self = Self(1);
    pub const SUB_FAMILY: Self = Self(2);
    pub const FULL: Self = Self(4);
    pub const POSTSCRIPT: Self = Self(6);
    pub const TYPOGRAPHIC_FAMILY: Self = Self(16);
    pub const TYPOGRAPHIC_SUB_FAMILY: Self = Self(17);
    pub const WWS_FAMILY: Self = Self(21);
    pub const WWS_SUB_FAMILY: Self = Self(22);
    pub const LIGHT_BACKGROUND_PALETTE: Self = Self(23);
    pub const DARK_BACKGROUND_PALETTE: Self = Self(24);

    /// Sentinel used by palette label arrays for entries without a name.
    pub const NONE: Self = Self(0xFFFF);

    /// Returns true if this id is the "no name" sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl From<u16> for NameId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
