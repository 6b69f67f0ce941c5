use crate::error::QuizError;
use serde::Serialize;

/// How many categories a results response carries.
pub const TOP_N: usize = 2;

/// One category paired with its scaled score. Serialized as-is in the
/// results response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: i64,
}

/// Rank categories by score descending and keep the best `n`.
///
/// Ties keep the original category order: the sort is stable over the
/// zipped `(name, score)` pairs, so two categories with equal scores come
/// out in column order.
///
/// # Errors
///
/// Returns `InvalidInput` if the names and scores differ in length or if
/// `n` exceeds the number of categories.
pub fn top_categories(
    names: &[&str],
    scores: &[i64],
    n: usize,
) -> Result<Vec<CategoryScore>, QuizError> {
    if names.len() != scores.len() {
        return Err(QuizError::InvalidInput(format!(
            "{} categorias mas {} pontuações",
            names.len(),
            scores.len()
        )));
    }
    if n > names.len() {
        return Err(QuizError::InvalidInput(format!(
            "top {} de {} categorias",
            n,
            names.len()
        )));
    }

    let mut ranked: Vec<CategoryScore> = names
        .iter()
        .zip(scores.iter())
        .map(|(&category, &score)| CategoryScore {
            category: category.to_string(),
            score,
        })
        .collect();

    // sort_by is stable; equal scores preserve category order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(n);
    Ok(ranked)
}
