//! Level-curve properties and the documented XP scenarios.

use leveling::{LevelCurve, MAX_LEVEL_XP_SPAN};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn scenario_fresh_player_is_level_one() {
    let info = LevelCurve::player().calculate(0.0);
    assert_eq!(info.level, 1);
    assert_eq!(info.xp_in_current_level, 0);
    assert_eq!(info.xp_for_next_level, 100);
    assert_eq!(info.progress, 0.0);
}

#[test]
fn scenario_250_xp_enters_level_three() {
    let info = LevelCurve::player().calculate(250.0);
    assert_eq!(info.level, 3);
    assert_eq!(info.xp_in_current_level, 0);
    assert_eq!(info.progress, 0.0);
}

#[test]
fn every_floor_enters_its_own_level() {
    let curve = LevelCurve::player();
    for def in curve.definitions() {
        let info = curve.calculate(def.xp_required as f64);
        assert_eq!(info.level, def.level, "floor of level {}", def.level);
        assert_eq!(info.xp_in_current_level, 0);
    }
}

#[test]
fn one_xp_below_a_floor_stays_in_the_previous_level() {
    let curve = LevelCurve::player();
    for def in curve.definitions().iter().skip(1) {
        let info = curve.calculate((def.xp_required - 1) as f64);
        assert_eq!(info.level, def.level - 1);
    }
}

#[test]
fn invalid_inputs_degrade_to_level_one() {
    let curve = LevelCurve::player();
    for bad in [-5.0, -1e12, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let info = curve.calculate(bad);
        assert_eq!(info.level, 1);
        assert_eq!(info.xp_in_current_level, 0);
        assert_eq!(info.progress, 0.0);
    }
}

#[test]
fn max_level_reports_the_sentinel_span() {
    let curve = LevelCurve::player();
    let info = curve.calculate(40_000.0);
    assert_eq!(info.level, 15);
    assert_eq!(info.xp_for_next_level, MAX_LEVEL_XP_SPAN);
}

#[test]
fn progress_is_rounded_to_two_decimals() {
    // 101 XP into the 450-wide level 5 band: 22.444... rounds to 22.44
    let info = LevelCurve::player().calculate(951.0);
    assert_eq!(info.level, 5);
    assert_eq!(info.xp_in_current_level, 101);
    assert_eq!(info.progress, 22.44);
}

#[test]
fn town_curve_is_independent_of_the_player_curve() {
    let player = LevelCurve::player().calculate(7_000.0);
    let town = LevelCurve::town().calculate(7_000.0);
    assert_eq!(town.level, 5);
    assert_ne!(player.level, town.level);
}

#[test]
fn custom_table_length_is_respected() {
    let json = r##"[
        {"level": 1, "xp_required": 0, "title": "A", "description": "", "color": "#111"},
        {"level": 2, "xp_required": 10, "title": "B", "description": "", "color": "#222"},
        {"level": 3, "xp_required": 30, "title": "C", "description": "", "color": "#333"},
        {"level": 4, "xp_required": 70, "title": "D", "description": "", "color": "#444"}
    ]"##;
    let curve = LevelCurve::from_json(json).unwrap();
    assert_eq!(curve.max_level(), 4);
    assert_eq!(curve.calculate(69.0).level, 3);
    assert_eq!(curve.calculate(70.0).level, 4);
}

proptest! {
    #[test]
    fn level_is_monotonic_in_xp(a in 0u32..200_000, b in 0u32..200_000) {
        let curve = LevelCurve::player();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.calculate(lo as f64).level <= curve.calculate(hi as f64).level);
    }

    #[test]
    fn progress_stays_in_bounds(xp in -1e9f64..1e9f64) {
        let info = LevelCurve::player().calculate(xp);
        prop_assert!(info.progress >= 0.0);
        prop_assert!(info.progress <= 100.0);
    }

    #[test]
    fn in_level_xp_matches_the_floor(xp in 0u32..200_000) {
        let curve = LevelCurve::player();
        let info = curve.calculate(xp as f64);
        let floor = curve.definition(info.level).unwrap().xp_required;
        prop_assert_eq!(info.xp_in_current_level, xp - floor);
    }

    #[test]
    fn town_curve_holds_the_same_properties(xp in -1e9f64..1e9f64) {
        let info = LevelCurve::town().calculate(xp);
        prop_assert!(info.level >= 1);
        prop_assert!((0.0..=100.0).contains(&info.progress));
    }
}
