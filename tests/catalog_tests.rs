use radar_rs::core::{SkillCatalog, SkillCategory, SkillLevel};
use radar_rs::render::Color;

fn category(id: &str, accent: &str, skills: &[(&str, f64)]) -> SkillCategory {
    SkillCategory {
        id: id.to_owned(),
        name: id.to_uppercase(),
        description: String::new(),
        accent_color: accent.to_owned(),
        skills: skills
            .iter()
            .map(|(name, level)| SkillLevel {
                name: (*name).to_owned(),
                level: *level,
            })
            .collect(),
    }
}

#[test]
fn catalog_preserves_insertion_order() {
    let catalog = SkillCatalog::from_categories(vec![
        category("frontend", "#e9c46a", &[("React", 95.0)]),
        category("backend", "#2a9d8f", &[("Node.js", 85.0)]),
        category("database", "#e76f51", &[("PostgreSQL", 80.0)]),
    ])
    .expect("catalog");

    let ids: Vec<&str> = catalog.categories().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["frontend", "backend", "database"]);
    assert_eq!(catalog.len(), 3);
    assert!(catalog.contains("backend"));
    assert!(!catalog.contains("mobile"));
}

#[test]
fn duplicate_category_ids_are_rejected() {
    let result = SkillCatalog::from_categories(vec![
        category("frontend", "#e9c46a", &[("React", 95.0)]),
        category("frontend", "#2a9d8f", &[("Vue", 70.0)]),
    ]);
    assert!(result.is_err());
}

#[test]
fn duplicate_skill_names_within_category_are_rejected() {
    let result = SkillCatalog::from_categories(vec![category(
        "frontend",
        "#e9c46a",
        &[("React", 95.0), ("React", 40.0)],
    )]);
    assert!(result.is_err());
}

#[test]
fn invalid_accent_colors_are_rejected() {
    assert!(SkillCatalog::from_categories(vec![category("a", "e9c46a", &[("X", 1.0)])]).is_err());
    assert!(SkillCatalog::from_categories(vec![category("a", "#e9c4", &[("X", 1.0)])]).is_err());
    assert!(SkillCatalog::from_categories(vec![category("a", "#zzzzzz", &[("X", 1.0)])]).is_err());
}

#[test]
fn accent_color_parses_rgb_and_rgba_hex() {
    let color = Color::from_hex("#e9c46a").expect("rgb hex");
    assert!((color.red - 233.0 / 255.0).abs() <= 1e-12);
    assert!((color.green - 196.0 / 255.0).abs() <= 1e-12);
    assert!((color.blue - 106.0 / 255.0).abs() <= 1e-12);
    assert_eq!(color.alpha, 1.0);

    let translucent = Color::from_hex("#e9c46a20").expect("rgba hex");
    assert!((translucent.alpha - 32.0 / 255.0).abs() <= 1e-12);
}

#[test]
fn empty_ids_and_out_of_range_levels_are_rejected() {
    assert!(SkillCatalog::from_categories(vec![category("", "#e9c46a", &[("X", 1.0)])]).is_err());
    assert!(
        SkillCatalog::from_categories(vec![category("a", "#e9c46a", &[("X", 120.0)])]).is_err()
    );
}

#[test]
fn catalog_json_round_trip() {
    let catalog = SkillCatalog::from_categories(vec![
        category("design", "#f4a261", &[("Figma", 70.0), ("Photoshop", 30.0)]),
        category("devops", "#457b9d", &[("Git", 90.0)]),
    ])
    .expect("catalog");

    let json = catalog.to_json_pretty().expect("serialize");
    let restored = SkillCatalog::from_json_str(&json).expect("parse");
    assert_eq!(restored, catalog);
}

#[test]
fn catalog_json_parse_rejects_malformed_input() {
    assert!(SkillCatalog::from_json_str("not json").is_err());
    assert!(SkillCatalog::from_json_str(r#"[{"id":"a"}]"#).is_err());
}
