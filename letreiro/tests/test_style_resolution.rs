//! End to end resolution: a variable face with palettes, turned into a
//! family of concrete instances and queried by style.

use letreiro::{
    tag_from_bytes, AxisRecord, FaceSource, InstanceRecord, NameId, PaletteData,
    TypeFamily, TypeSlope, TypeWeight, TypeWidth, Typeface,
};

/// A two axis variable face with named instances, a palette table and the
/// usual naming entries, the way a file backed provider would present it.
struct DemoFace;

impl FaceSource for DemoFace {
    fn axis_records(&self) -> Vec<AxisRecord> {
        vec![
            AxisRecord {
                tag: tag_from_bytes(b"wght"),
                min_value: 100.0,
                default_value: 400.0,
                max_value: 900.0,
                flags: 0,
                name_id: NameId(270),
            },
            AxisRecord {
                tag: tag_from_bytes(b"wdth"),
                min_value: 75.0,
                default_value: 100.0,
                max_value: 125.0,
                flags: 0,
                name_id: NameId(271),
            },
        ]
    }

    fn instance_records(&self) -> Vec<InstanceRecord> {
        vec![
            InstanceRecord {
                name_id: NameId(280),
                coordinates: vec![400.0, 100.0],
                postscript_name_id: None,
            },
            InstanceRecord {
                name_id: NameId(281),
                coordinates: vec![700.0, 100.0],
                postscript_name_id: Some(NameId(282)),
            },
            InstanceRecord {
                name_id: NameId(283),
                coordinates: vec![700.0, 75.0],
                postscript_name_id: None,
            },
        ]
    }

    fn palette_data(&self) -> Option<PaletteData> {
        Some(PaletteData {
            num_palette_entries: 3,
            num_palettes: 1,
            color_records: vec![0xFF101010, 0xFF2020FF, 0xFFFFFFFF],
            color_record_indices: vec![0],
            palette_types: None,
            palette_labels: None,
            palette_entry_labels: None,
        })
    }

    fn name_string(&self, id: NameId) -> Option<String> {
        match id.0 {
            1 => Some("Demo Sans".into()),
            2 => Some("Regular".into()),
            270 => Some("Weight".into()),
            271 => Some("Width".into()),
            280 => Some("Regular".into()),
            281 => Some("Bold".into()),
            282 => Some("DemoSans-Bold".into()),
            283 => Some("Bold Condensed".into()),
            _ => None,
        }
    }
}

fn build_family() -> TypeFamily {
    let root = Typeface::new(DemoFace);
    let members: Vec<Typeface> = root
        .named_styles()
        .expect("face is variable")
        .iter()
        .map(|style| root.variation_instance(&style.coordinates).unwrap())
        .collect();
    TypeFamily::new(root.family_name().to_owned(), members).unwrap()
}

#[test]
fn root_resolves_names_and_defaults() {
    let root = Typeface::new(DemoFace);
    assert!(root.is_variable());
    assert_eq!(root.variation_axes().unwrap().len(), 2);
    assert_eq!(root.variation_coordinates(), Some(&[400.0, 100.0][..]));
    assert_eq!(root.full_name(), "Demo Sans Regular");
    assert_eq!(root.associated_colors().unwrap().len(), 3);
}

#[test]
fn declared_default_instance_is_not_duplicated() {
    let root = Typeface::new(DemoFace);
    let styles = root.named_styles().unwrap();
    assert_eq!(styles.len(), 3);
    assert_eq!(styles[0].style_name, "Regular");
    assert_eq!(styles[1].postscript_name.as_deref(), Some("DemoSans-Bold"));
}

#[test]
fn family_members_carry_instance_characteristics() {
    let family = build_family();
    let names: Vec<&str> = family
        .typefaces()
        .iter()
        .map(|typeface| typeface.style_name())
        .collect();
    assert_eq!(names, vec!["Regular", "Bold", "Bold Condensed"]);

    let condensed = &family.typefaces()[2];
    assert_eq!(condensed.weight(), TypeWeight::Bold);
    assert_eq!(condensed.width(), TypeWidth::Condensed);
    assert_eq!(condensed.full_name(), "Demo Sans Bold Condensed");
}

#[test]
fn style_queries_select_the_expected_member() {
    let family = build_family();

    let bold = family.typeface_by_style(
        TypeWidth::Normal,
        TypeWeight::Bold,
        TypeSlope::Plain,
    );
    assert_eq!(bold.style_name(), "Bold");

    let condensed = family.typeface_by_style(
        TypeWidth::Condensed,
        TypeWeight::Bold,
        TypeSlope::Plain,
    );
    assert_eq!(condensed.style_name(), "Bold Condensed");

    // No italic member exists; the matcher still returns a face.
    let fallback = family.typeface_by_style(
        TypeWidth::Normal,
        TypeWeight::Regular,
        TypeSlope::Italic,
    );
    assert_eq!(fallback.style_name(), "Regular");
}

#[test]
fn color_instances_share_the_family_defaults() {
    let root = Typeface::new(DemoFace);
    let tinted = root
        .color_instance(&[0xFF000000, 0xFF111111, 0xFF222222])
        .unwrap();
    assert_eq!(
        tinted.associated_colors(),
        Some(&[0xFF000000, 0xFF111111, 0xFF222222][..])
    );
    let root_palettes = root.predefined_palettes().unwrap();
    let tinted_palettes = tinted.predefined_palettes().unwrap();
    assert!(std::ptr::eq(root_palettes.as_ptr(), tinted_palettes.as_ptr()));
}
