//! Streak tracking and score aggregation.
//!
//! All functions here recompute from the full answer history; nothing is
//! cached or patched incrementally.
use crate::country::Country;
use crate::quiz::{is_correct, Answer, Mode, Options};

/// Bonus unit awarded per streak threshold reached.
pub const SCORE_PER_STREAK: u32 = 1000;

/// Per-answer unit of the all-correct achievement bonus.
pub const ALL_CORRECT_ACHIEVEMENT_SCORE: f64 = 500.0;

/// Fixed streak lengths that each award one bonus unit.
pub const STREAK_THRESHOLDS: [u32; 1] = [3];

/// Every multiple of this streak length awards one more bonus unit.
pub const STREAK_MODULUS: u32 = 5;

/// Flat per-answer base score in non-timed modes.
pub const FLAT_BASE_SCORE: f64 = 500.0;

/// Dividend of the inverse-time base score in timed mode.
pub const BASE_SCORE_DIVIDEND: f64 = 1_000_000.0;

/// Minimum history length for the all-correct achievement.
const ACHIEVEMENT_MIN_ANSWERS: usize = 3;

/// Score breakdown for a full answer history.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    /// Recorded times of the correct answers, in play order.
    pub correct_answer_times: Vec<f64>,
    /// Streak-run partition of the history (see [`all_streaks`]).
    pub streaks: Vec<u32>,
    pub total_base_score: f64,
    pub total_streak_score: f64,
    pub all_correct_achievement_bonus: f64,
    pub total_score: f64,
}

/// Count of consecutive correct answers at the tail of the history.
pub fn current_streak(history: &[Answer], options: &Options, catalog: &[Country]) -> u32 {
    history
        .iter()
        .rev()
        .take_while(|answer| is_correct(answer, options, catalog))
        .count() as u32
}

/// Partitions the history into streak-run lengths, in order.
///
/// Starts from a single `0`; a correct answer increments the last run, an
/// incorrect one opens a new run. The result always has at least one element
/// and its sum equals the count of correct answers.
pub fn all_streaks(history: &[Answer], options: &Options, catalog: &[Country]) -> Vec<u32> {
    let mut streaks = vec![0u32];
    for answer in history {
        if is_correct(answer, options, catalog) {
            if let Some(last) = streaks.last_mut() {
                *last += 1;
            }
        } else {
            streaks.push(0);
        }
    }
    streaks
}

/// True when a streak just reached a notification-worthy length: a fixed
/// threshold or a positive multiple of [`STREAK_MODULUS`]. UI trigger only;
/// scoring goes through [`compute_scores`].
pub fn is_streak_at_threshold(streak: u32) -> bool {
    streak > 1 && (STREAK_THRESHOLDS.contains(&streak) || streak % STREAK_MODULUS == 0)
}

/// True when every answer is correct and there are at least three of them.
pub fn is_all_correct_achievement(
    history: &[Answer],
    options: &Options,
    catalog: &[Country],
) -> bool {
    history.len() >= ACHIEVEMENT_MIN_ANSWERS
        && history.iter().all(|answer| is_correct(answer, options, catalog))
}

/// Base score for one correct answer with a recorded time.
fn base_score(options: &Options, time_millis: f64) -> f64 {
    match options.mode {
        Mode::Timed => BASE_SCORE_DIVIDEND / time_millis,
        Mode::Classic | Mode::Endless => FLAT_BASE_SCORE,
    }
}

/// Bonus for one streak run: one unit per fixed threshold reached plus one
/// unit per full [`STREAK_MODULUS`] answered.
fn streak_score(streak: u32) -> f64 {
    let thresholds_reached = STREAK_THRESHOLDS.iter().filter(|&&t| streak >= t).count() as u32;
    let units = thresholds_reached + streak / STREAK_MODULUS;
    f64::from(units * SCORE_PER_STREAK)
}

/// Aggregates the full score breakdown for an answer history.
pub fn compute_scores(history: &[Answer], options: &Options, catalog: &[Country]) -> Scores {
    let correct_answer_times: Vec<f64> = history
        .iter()
        .filter(|answer| is_correct(answer, options, catalog))
        .filter_map(|answer| answer.time_taken_millis)
        .collect();
    let streaks = all_streaks(history, options, catalog);

    let total_base_score: f64 = correct_answer_times
        .iter()
        .map(|&time| base_score(options, time))
        .sum();
    let total_streak_score: f64 = streaks.iter().map(|&s| streak_score(s)).sum();
    let all_correct_achievement_bonus = if is_all_correct_achievement(history, options, catalog) {
        ALL_CORRECT_ACHIEVEMENT_SCORE * history.len() as f64
    } else {
        0.0
    };
    let total_score = total_base_score + total_streak_score + all_correct_achievement_bonus;

    Scores {
        correct_answer_times,
        streaks,
        total_base_score,
        total_streak_score,
        all_correct_achievement_bonus,
        total_score,
    }
}
