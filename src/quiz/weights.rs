pub const NUM_QUESTIONS: usize = 15;
pub const NUM_CATEGORIES: usize = 6;

/// Vocational categories, in fixed column order.
pub const CATEGORIES: [&str; NUM_CATEGORIES] = [
    "Administração",
    "Pedagogia",
    "Programação",
    "Medicina",
    "Direito",
    "Engenharia",
];

// Row = question, column = category. Fixed for the process lifetime.
const WEIGHTS: [[i64; NUM_CATEGORIES]; NUM_QUESTIONS] = [
    [2, 3, 4, 1, 5, 3],
    [1, 4, 2, 5, 3, 4],
    [5, 2, 3, 4, 1, 3],
    [4, 1, 5, 2, 4, 2],
    [3, 5, 1, 3, 2, 4],
    [2, 4, 2, 5, 3, 1],
    [4, 3, 5, 2, 1, 4],
    [5, 1, 3, 4, 2, 3],
    [3, 4, 1, 5, 4, 2],
    [2, 5, 4, 1, 3, 4],
    [4, 2, 5, 3, 1, 5],
    [5, 3, 2, 4, 2, 3],
    [3, 4, 1, 5, 4, 1],
    [2, 5, 4, 1, 3, 2],
    [4, 2, 5, 3, 1, 4],
];

/// Immutable question-to-category weight matrix.
///
/// Answer vectors are validated against `rows()` before scoring, so element
/// access is always in bounds by construction.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    weights: &'static [[i64; NUM_CATEGORIES]; NUM_QUESTIONS],
}

impl WeightTable {
    /// The fixed table used by the quiz. Weights are compile-time constants.
    pub const fn fixed() -> Self {
        Self { weights: &WEIGHTS }
    }

    pub const fn rows(&self) -> usize {
        NUM_QUESTIONS
    }

    pub const fn columns(&self) -> usize {
        NUM_CATEGORIES
    }

    pub fn weight(&self, row: usize, col: usize) -> i64 {
        self.weights[row][col]
    }

    /// Largest weight anywhere in the matrix, across all categories.
    pub fn max_weight(&self) -> i64 {
        self.weights.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let table = WeightTable::fixed();
        assert_eq!(table.rows(), 15);
        assert_eq!(table.columns(), 6);
        assert_eq!(CATEGORIES.len(), table.columns());
    }

    #[test]
    fn test_weights_are_positive() {
        let table = WeightTable::fixed();
        for row in 0..table.rows() {
            for col in 0..table.columns() {
                assert!(table.weight(row, col) > 0, "weight({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_access_is_constant() {
        let table = WeightTable::fixed();
        let first = table.weight(3, 2);
        for _ in 0..10 {
            assert_eq!(table.weight(3, 2), first);
        }
        assert_eq!(WeightTable::fixed().weight(3, 2), first);
    }

    #[test]
    fn test_global_max_weight() {
        assert_eq!(WeightTable::fixed().max_weight(), 5);
    }

    #[test]
    fn test_category_order() {
        assert_eq!(CATEGORIES[0], "Administração");
        assert_eq!(CATEGORIES[5], "Engenharia");
    }
}
