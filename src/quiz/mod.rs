pub mod weights;

pub use weights::{WeightTable, CATEGORIES, NUM_CATEGORIES, NUM_QUESTIONS};
