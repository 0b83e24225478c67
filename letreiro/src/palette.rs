//! Resolution of predefined color palettes.

use bitflags::bitflags;

use crate::face::FaceSource;
use crate::string::NameId;

/// Color of a palette entry in ARGB order.
pub type Color = u32;

bitflags! {
    /// Flags describing the backgrounds a palette is designed for.
    #[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
    pub struct PaletteFlags: u32 {
        const USABLE_WITH_LIGHT_BACKGROUND = 0x0001;
        const USABLE_WITH_DARK_BACKGROUND = 0x0002;
    }
}

/// Fixed size, ordered set of colors for layered glyph outlines.
#[derive(Clone, PartialEq, Debug)]
pub struct ColorPalette {
    pub name: String,
    pub flags: PaletteFlags,
    pub colors: Vec<Color>,
}

/// Resolves the palette entry names and the predefined palettes of a face.
///
/// Returns `None` when the face has no palette table or declares zero
/// palettes; the descriptor then reports no palette support.
pub fn resolve_palette_defaults(
    source: &dyn FaceSource,
) -> Option<(Vec<String>, Vec<ColorPalette>)> {
    let data = source.palette_data()?;
    if data.num_palettes == 0 {
        tracing::debug!("palette table declares zero palettes, ignoring it");
        return None;
    }

    let num_entries = data.num_palette_entries as usize;
    let mut palettes = Vec::with_capacity(data.num_palettes as usize);

    for index in 0..data.num_palettes as usize {
        let name = data
            .palette_labels
            .as_ref()
            .and_then(|labels| labels.get(index).copied())
            .map(|id| resolve_label(source, id))
            .unwrap_or_default();

        let flags = data
            .palette_types
            .as_ref()
            .and_then(|types| types.get(index).copied())
            .map(PaletteFlags::from_bits_truncate)
            .unwrap_or_default();

        let first = data
            .color_record_indices
            .get(index)
            .copied()
            .unwrap_or_default() as usize;
        let colors = (first..first + num_entries)
            .map(|i| data.color_records.get(i).copied().unwrap_or_default())
            .collect();

        palettes.push(ColorPalette { name, flags, colors });
    }

    let entry_names = match &data.palette_entry_labels {
        None => vec![String::new(); num_entries],
        Some(labels) => (0..num_entries)
            .map(|i| {
                labels
                    .get(i)
                    .copied()
                    .map(|id| resolve_label(source, id))
                    .unwrap_or_default()
            })
            .collect(),
    };

    Some((entry_names, palettes))
}

fn resolve_label(source: &dyn FaceSource, id: NameId) -> String {
    if id.is_none() {
        return String::new();
    }
    source.name_string(id).unwrap_or_default()
}
