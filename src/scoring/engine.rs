use crate::error::QuizError;
use crate::quiz::weights::{WeightTable, NUM_CATEGORIES};

/// Scaled-score floor. A respondent answering the minimum on every question
/// still lands here.
pub const MIN_SCORE: i64 = 15;
/// Scaled-score ceiling.
pub const MAX_SCORE: i64 = 75;

/// Compute the scaled per-category scores for one answer vector.
///
/// The raw score per category is the vector–matrix product of the answers
/// with the weight table. Raw scores are then mapped linearly onto
/// `[MIN_SCORE, MAX_SCORE]` against a theoretical maximum of
/// `rows * max_weight` and clamped into that range.
///
/// The theoretical maximum uses the single largest weight anywhere in the
/// matrix, not a per-category maximum. Categories whose weights never reach
/// that global maximum cannot reach `MAX_SCORE`. That normalization is part
/// of the observable contract and must not be tightened.
///
/// Answer values are not range-checked; only the vector length is. Raw
/// totals accumulate in `f64` so arbitrarily large answers clamp instead
/// of overflowing. The function is pure and holds no state between calls.
///
/// # Errors
///
/// Returns `InvalidAnswerLength` when the vector does not have exactly one
/// answer per question.
pub fn compute_scores(
    answers: &[i64],
    table: &WeightTable,
) -> Result<[i64; NUM_CATEGORIES], QuizError> {
    if answers.len() != table.rows() {
        return Err(QuizError::InvalidAnswerLength {
            expected: table.rows(),
        });
    }

    let mut raw = [0f64; NUM_CATEGORIES];
    for (row, &answer) in answers.iter().enumerate() {
        for (col, total) in raw.iter_mut().enumerate() {
            *total += answer as f64 * table.weight(row, col) as f64;
        }
    }

    let max_possible = (table.rows() as i64 * table.max_weight()) as f64;
    let span = (MAX_SCORE - MIN_SCORE) as f64;

    let mut scaled = [0i64; NUM_CATEGORIES];
    for (slot, &score) in scaled.iter_mut().zip(raw.iter()) {
        let proportion = score / max_possible;
        // f64::round is round half away from zero.
        let value = (proportion * span + MIN_SCORE as f64).round();
        *slot = value.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as i64;
    }

    Ok(scaled)
}
