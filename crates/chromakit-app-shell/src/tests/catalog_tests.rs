use super::*;

#[test]
fn builtin_catalog_has_every_shipped_entry() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.palette().len(), 35);
    assert_eq!(catalog.contrast_pairs().len(), 8);
    assert_eq!(catalog.gradients().len(), 6);
}

#[test]
fn lowercase_seeds_are_canonicalized() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.palette().last(), Some(&Color(0xF0, 0xF0, 0xF0)));
}

#[test]
fn malformed_entries_are_dropped() {
    let gradients: &[(f32, &[&str])] = &[
        (90.0, &["#F00 0%", "#00F 100%"][..]),
        (45.0, &[][..]),
        (0.0, &["#F00"][..]),
    ];
    let catalog = Catalog::new(
        &["#FFF", "nope", "#12345"],
        &[("ok", "#000", "#FFF"), ("bad", "#GGG", "#FFF")],
        gradients,
    );

    assert_eq!(catalog.palette(), &[Color::WHITE]);
    assert_eq!(
        catalog.contrast_pairs(),
        &[ContrastPair {
            label: "ok".to_string(),
            foreground: Color::BLACK,
            background: Color::WHITE,
        }]
    );
    assert_eq!(catalog.gradients().len(), 1);
    assert_eq!(catalog.gradients()[0].angle_degrees(), 90.0);
}

#[test]
fn palette_rows_follow_column_count() {
    let catalog = Catalog::builtin();
    let rows = catalog.palette_rows(10);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].len(), 5);

    assert_eq!(catalog.palette_rows(0).len(), 35);
}
