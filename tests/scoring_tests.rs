//! Scoring arithmetic pinned to exact point values.

use blockfall::core::compute_points;
use blockfall::core::scoring::{step_delay_for_level, ScoreState};

#[test]
fn test_exact_point_values() {
    assert_eq!(compute_points(1, 0), 1);
    assert_eq!(compute_points(2, 0), 3);
    assert_eq!(compute_points(3, 0), 5);
    assert_eq!(compute_points(4, 0), 8);
    // Back-to-back flat rule for clears under six lines
    assert_eq!(compute_points(4, 4), 12);
    assert_eq!(compute_points(5, 5), 12);
    // Back-to-back additive branch at six lines and up
    assert_eq!(compute_points(8, 4), 24);
}

#[test]
fn test_back_to_back_requires_both_clears_big() {
    assert_eq!(compute_points(4, 3), 8);
    assert_eq!(compute_points(3, 4), 5);
    assert_eq!(compute_points(1, 4), 1);
}

#[test]
fn test_multi_of_four_bonus() {
    assert_eq!(compute_points(8, 0), 2 * 8 - 1 + 2);
    assert_eq!(compute_points(12, 0), 2 * 12 - 1 + 3);
}

#[test]
fn test_score_monotonically_non_decreasing() {
    let mut state = ScoreState::new(1.0, true);
    let mut last = 0;
    for lines in [1, 0, 4, 4, 0, 2, 8, 3] {
        state.apply_clear(lines);
        assert!(state.score() >= last);
        last = state.score();
    }
}

#[test]
fn test_level_curve_monotonically_speeds_up() {
    let mut previous = f32::MAX;
    for level in 1..=15 {
        let delay = step_delay_for_level(level);
        assert!(delay > 0.0);
        assert!(delay <= previous, "level {} should not slow down", level);
        previous = delay;
    }
}

#[test]
fn test_first_level_up_resets_counter() {
    let mut state = ScoreState::new(2.0, true);
    // A tetris: 8 points, 8/5 > 0 fires the first level-up
    state.apply_clear(4);
    assert_eq!(state.level(), 1);
    assert!((state.step_delay() - 1.0).abs() < 1e-6);

    // Counter restarted: a single (1 point) cannot fire level 2
    state.apply_clear(1);
    assert_eq!(state.level(), 1);
}
