pub mod engine;
pub mod ranking;

pub use engine::{compute_scores, MAX_SCORE, MIN_SCORE};
pub use ranking::{top_categories, CategoryScore, TOP_N};
