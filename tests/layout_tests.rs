use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use radar_rs::RadarError;
use radar_rs::core::{SkillLevel, compute_radar_layout};

const EPS: f64 = 1e-9;

fn skills(levels: &[(&str, f64)]) -> Vec<SkillLevel> {
    levels
        .iter()
        .map(|(name, level)| SkillLevel::new(*name, *level).expect("valid skill"))
        .collect()
}

#[test]
fn three_skill_reference_scenario() {
    let skills = skills(&[("A", 100.0), ("B", 0.0), ("C", 50.0)]);
    let layout = compute_radar_layout(&skills, 150.0, 1.0).expect("layout");

    assert_eq!(layout.points.len(), 3);
    assert_abs_diff_eq!(layout.center_x, 150.0, epsilon = EPS);
    assert_abs_diff_eq!(layout.center_y, 150.0, epsilon = EPS);

    // A: full level at the top position.
    assert_abs_diff_eq!(layout.points[0].x, 150.0, epsilon = EPS);
    assert_abs_diff_eq!(layout.points[0].y, 0.0, epsilon = EPS);

    // B: zero level collapses onto the center.
    assert_abs_diff_eq!(layout.points[1].x, 150.0, epsilon = EPS);
    assert_abs_diff_eq!(layout.points[1].y, 150.0, epsilon = EPS);

    // C: half level at 150 degrees.
    let angle = 150.0_f64.to_radians();
    assert_abs_diff_eq!(layout.points[2].x, 150.0 + 75.0 * angle.cos(), epsilon = EPS);
    assert_abs_diff_eq!(layout.points[2].y, 150.0 + 75.0 * angle.sin(), epsilon = EPS);
}

#[test]
fn single_skill_lands_at_top_position() {
    let skills = skills(&[("Solo", 80.0)]);
    let layout = compute_radar_layout(&skills, 100.0, 1.0).expect("layout");

    assert_eq!(layout.points.len(), 1);
    assert_abs_diff_eq!(layout.points[0].angle, -FRAC_PI_2, epsilon = EPS);
    assert_abs_diff_eq!(layout.points[0].x, 100.0, epsilon = EPS);
    assert_abs_diff_eq!(layout.points[0].y, 20.0, epsilon = EPS);
}

#[test]
fn empty_sequence_yields_empty_layout_with_center() {
    let layout = compute_radar_layout(&[], 120.0, 0.5).expect("layout");
    assert!(layout.points.is_empty());
    assert_abs_diff_eq!(layout.center_x, 120.0, epsilon = EPS);
    assert_abs_diff_eq!(layout.center_y, 120.0, epsilon = EPS);
}

#[test]
fn zero_progress_collapses_every_point_to_center() {
    let skills = skills(&[("A", 100.0), ("B", 55.0), ("C", 10.0), ("D", 90.0)]);
    let layout = compute_radar_layout(&skills, 150.0, 0.0).expect("layout");

    for point in &layout.points {
        assert_abs_diff_eq!(point.x, layout.center_x, epsilon = EPS);
        assert_abs_diff_eq!(point.y, layout.center_y, epsilon = EPS);
    }
}

#[test]
fn full_level_point_lies_on_bounding_circle() {
    let skills = skills(&[("A", 100.0), ("B", 100.0), ("C", 100.0), ("D", 100.0)]);
    let layout = compute_radar_layout(&skills, 200.0, 1.0).expect("layout");

    for point in &layout.points {
        let distance =
            ((point.x - layout.center_x).powi(2) + (point.y - layout.center_y).powi(2)).sqrt();
        assert_abs_diff_eq!(distance, 200.0, epsilon = EPS);
    }
}

#[test]
fn angles_are_evenly_spaced_from_top() {
    let skills = skills(&[("A", 50.0), ("B", 50.0), ("C", 50.0), ("D", 50.0), ("E", 50.0)]);
    let layout = compute_radar_layout(&skills, 150.0, 1.0).expect("layout");

    let step = 2.0 * PI / 5.0;
    assert_abs_diff_eq!(layout.points[0].angle, -FRAC_PI_2, epsilon = EPS);
    for pair in layout.points.windows(2) {
        assert_abs_diff_eq!(pair[1].angle - pair[0].angle, step, epsilon = EPS);
    }
}

#[test]
fn label_position_is_stable_across_progress() {
    let skills = skills(&[("A", 100.0), ("B", 40.0), ("C", 70.0)]);
    let collapsed = compute_radar_layout(&skills, 150.0, 0.0).expect("layout");
    let revealed = compute_radar_layout(&skills, 150.0, 1.0).expect("layout");

    for (a, b) in collapsed.points.iter().zip(&revealed.points) {
        let pos_a = collapsed.label_position(a, 160.0).expect("label");
        let pos_b = revealed.label_position(b, 160.0).expect("label");
        assert_abs_diff_eq!(pos_a.0, pos_b.0, epsilon = EPS);
        assert_abs_diff_eq!(pos_a.1, pos_b.1, epsilon = EPS);
    }
}

#[test]
fn point_lookup_by_name() {
    let skills = skills(&[("React", 95.0), ("Rust", 90.0)]);
    let layout = compute_radar_layout(&skills, 150.0, 1.0).expect("layout");

    assert_eq!(layout.point_by_name("Rust").expect("hit").skill.level, 90.0);
    assert!(layout.point_by_name("Cobol").is_none());
}

#[test]
fn non_positive_radius_is_rejected_even_for_empty_input() {
    let err = compute_radar_layout(&[], -5.0, 1.0).expect_err("must fail");
    assert!(matches!(err, RadarError::InvalidArgument(_)));

    assert!(compute_radar_layout(&[], 0.0, 1.0).is_err());
    assert!(compute_radar_layout(&[], f64::NAN, 1.0).is_err());
}

#[test]
fn out_of_range_progress_is_rejected() {
    let skills = skills(&[("A", 50.0)]);
    assert!(compute_radar_layout(&skills, 150.0, -0.1).is_err());
    assert!(compute_radar_layout(&skills, 150.0, 1.1).is_err());
    assert!(compute_radar_layout(&skills, 150.0, f64::NAN).is_err());
}

#[test]
fn invalid_skill_records_are_rejected() {
    assert!(SkillLevel::new("", 50.0).is_err());
    assert!(SkillLevel::new("A", -1.0).is_err());
    assert!(SkillLevel::new("A", 101.0).is_err());
    assert!(SkillLevel::new("A", f64::NAN).is_err());

    let bad = vec![SkillLevel {
        name: "A".to_owned(),
        level: 250.0,
    }];
    assert!(compute_radar_layout(&bad, 150.0, 1.0).is_err());
}

#[test]
fn invalid_label_distance_is_rejected() {
    let skills = skills(&[("A", 50.0)]);
    let layout = compute_radar_layout(&skills, 150.0, 1.0).expect("layout");
    let point = &layout.points[0];

    assert!(layout.label_position(point, 0.0).is_err());
    assert!(layout.label_position(point, -10.0).is_err());
    assert!(layout.label_position(point, f64::INFINITY).is_err());
}

#[test]
fn svg_points_attribute_joins_vertices() {
    let skills = skills(&[("A", 0.0), ("B", 0.0), ("C", 0.0)]);
    let layout = compute_radar_layout(&skills, 150.0, 1.0).expect("layout");

    assert_eq!(layout.svg_points_attribute(), "150,150 150,150 150,150");
    assert_eq!(layout.polygon_vertices().len(), 3);
}
