//! Scoring and leveling.
//!
//! Points for a clear depend on the line count and on the previous clear's
//! line count (back-to-back bonus), including the flat-12 back-to-back
//! override for 4-5 line clears and the additive branch for 6 and up.

/// Points for a clear of `lines` rows, given the previous clear's row count.
///
/// Only meaningful for `lines > 0`.
pub fn compute_points(lines: u32, previous_lines: u32) -> u32 {
    let mut points = 2 * lines - 1;

    // Multi-of-4 bonus
    if lines % 4 == 0 {
        points += lines / 4;
    }

    // Back-to-back adjustment
    if lines >= 4 && previous_lines >= 4 {
        if lines < 6 {
            points = 12;
        } else {
            points += (lines - 4) * 2 - 1;
        }
    }

    points
}

/// Gravity interval in seconds for a level (level counted from 1 at the
/// first level-up)
pub fn step_delay_for_level(level: u32) -> f32 {
    let l = level as f32 - 1.0;
    (0.8 - 0.007 * l).powi(level as i32 - 1)
}

/// Session score/level state, mutated only on clear events
#[derive(Debug, Clone)]
pub struct ScoreState {
    score: u32,
    /// 0 until the first level-up fires
    level: u32,
    points_since_level_up: u32,
    /// Line count of the most recent clear event (back-to-back comparison)
    previous_lines: u32,
    leveling_enabled: bool,
    /// Current gravity interval in seconds
    step_delay: f32,
}

impl ScoreState {
    pub fn new(base_step_delay: f32, leveling_enabled: bool) -> Self {
        Self {
            score: 0,
            level: 0,
            points_since_level_up: 0,
            previous_lines: 0,
            leveling_enabled,
            step_delay: base_step_delay,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn step_delay(&self) -> f32 {
        self.step_delay
    }

    /// Record a clear event: accumulate points and drive the level-up rule.
    /// No-op when `lines == 0`.
    pub fn apply_clear(&mut self, lines: u32) -> u32 {
        if lines == 0 {
            return 0;
        }

        let points = compute_points(lines, self.previous_lines);
        self.score += points;
        self.points_since_level_up += points;

        if self.leveling_enabled && self.points_since_level_up / 5 > self.level {
            self.level += 1;
            self.points_since_level_up = 0;
            self.step_delay = step_delay_for_level(self.level);
        }

        self.previous_lines = lines;
        points
    }
}
