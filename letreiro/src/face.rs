//! Collaborator interface supplying raw face metadata.

use crate::attributes::SelectionFlags;
use crate::palette::Color;
use crate::string::NameId;
use crate::Tag;

/// One axis record from a face's variation table.
#[derive(Clone, PartialEq, Debug)]
pub struct AxisRecord {
    pub tag: Tag,
    pub min_value: f32,
    pub default_value: f32,
    pub max_value: f32,
    pub flags: u16,
    pub name_id: NameId,
}

/// One named instance record from a face's variation table.
///
/// `coordinates` is positional against the axis record order.
#[derive(Clone, PartialEq, Debug)]
pub struct InstanceRecord {
    pub name_id: NameId,
    pub coordinates: Vec<f32>,
    pub postscript_name_id: Option<NameId>,
}

/// The palette table of a face, already decoded into flat arrays.
///
/// `color_record_indices[i]` is the index of palette `i`'s first color in
/// `color_records`; each palette spans `num_palette_entries` consecutive
/// records. The optional arrays follow the table's version 1 extensions
/// and may each be absent independently.
#[derive(Clone, PartialEq, Debug)]
pub struct PaletteData {
    pub num_palette_entries: u16,
    pub num_palettes: u16,
    pub color_records: Vec<Color>,
    pub color_record_indices: Vec<u16>,
    pub palette_types: Option<Vec<u32>>,
    pub palette_labels: Option<Vec<NameId>>,
    pub palette_entry_labels: Option<Vec<NameId>>,
}

/// Source of raw metadata for a single face.
///
/// Implementations wrap whatever actually parses the font file. Every
/// method describes an optional feature: a face without variation support
/// returns no axis records, a face without palettes returns no palette
/// data, and name lookups may fail for any id. The resolvers never treat
/// any of that as an error.
///
/// Record contents are trusted as declared; a source that reports counts
/// inconsistent with its arrays is a source bug, not something the
/// resolvers validate.
pub trait FaceSource: Send + Sync {
    /// Returns the axis records of the variation table, in declaration
    /// order. Empty when the face is not variable.
    fn axis_records(&self) -> Vec<AxisRecord> {
        Vec::new()
    }

    /// Returns the named instance records of the variation table, in
    /// declaration order.
    fn instance_records(&self) -> Vec<InstanceRecord> {
        Vec::new()
    }

    /// Returns the decoded palette table, if the face has one.
    fn palette_data(&self) -> Option<PaletteData> {
        None
    }

    /// Looks a string up in the naming table.
    fn name_string(&self, id: NameId) -> Option<String>;

    /// Returns the face's intrinsic family name.
    fn family_name(&self) -> Option<String> {
        self.name_string(NameId::FAMILY)
    }

    /// Returns the face's intrinsic style name. Also used as the style
    /// name of a synthesized default instance.
    fn style_name(&self) -> Option<String> {
        self.name_string(NameId::SUB_FAMILY)
    }

    /// Returns the face's intrinsic full name.
    fn full_name(&self) -> Option<String> {
        self.name_string(NameId::FULL)
    }

    /// Returns the OS/2 `usWidthClass` of the face.
    fn width_class(&self) -> u16 {
        5
    }

    /// Returns the OS/2 `usWeightClass` of the face.
    fn weight_class(&self) -> u16 {
        400
    }

    /// Returns the OS/2 selection flags of the face.
    fn selection_flags(&self) -> SelectionFlags {
        SelectionFlags::empty()
    }
}
