//! RAMAK questionnaire structure.
//!
//! Maps each trait category to the 9 questions that feed it, split into
//! three priority levels of 3 questions each. The index lists are copied
//! verbatim from the authored questionnaire mapping — several indices are
//! deliberately shared between categories, so they must never be derived
//! from a formula.

use crate::models::traits::TraitCategory;

/// Number of questions in the RAMAK inventory.
pub const QUESTION_COUNT: usize = 72;

/// Priority level of a question within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Scoring weight: Level 1 counts most.
    pub fn weight(&self) -> u32 {
        match self {
            Level::One => 3,
            Level::Two => 2,
            Level::Three => 1,
        }
    }
}

/// Question indices assigned to one category, three per level.
#[derive(Debug, Clone, Copy)]
pub struct CategoryQuestions {
    pub category: TraitCategory,
    pub level1: [usize; 3],
    pub level2: [usize; 3],
    pub level3: [usize; 3],
}

impl CategoryQuestions {
    pub fn level(&self, level: Level) -> [usize; 3] {
        match level {
            Level::One => self.level1,
            Level::Two => self.level2,
            Level::Three => self.level3,
        }
    }
}

/// The authored mapping, one entry per category in `TraitCategory::ALL`
/// order.
pub const QUESTION_ASSIGNMENTS: [CategoryQuestions; 8] = [
    CategoryQuestions {
        category: TraitCategory::Business,
        level1: [9, 45, 54],
        level2: [20, 28, 36],
        level3: [2, 59, 68],
    },
    CategoryQuestions {
        category: TraitCategory::GeneralCulture,
        level1: [21, 30, 51],
        level2: [4, 10, 46],
        level3: [35, 62, 71],
    },
    CategoryQuestions {
        category: TraitCategory::ArtsAndEntertainment,
        level1: [3, 27, 52],
        level2: [13, 34, 60],
        level3: [23, 44, 67],
    },
    CategoryQuestions {
        category: TraitCategory::Science,
        level1: [7, 15, 57],
        level2: [22, 25, 43],
        level3: [32, 53, 65],
    },
    CategoryQuestions {
        category: TraitCategory::Organization,
        level1: [12, 18, 66],
        level2: [7, 37, 40],
        level3: [11, 29, 41],
    },
    CategoryQuestions {
        category: TraitCategory::Service,
        level1: [0, 33, 48],
        level2: [19, 58, 64],
        level3: [11, 29, 41],
    },
    CategoryQuestions {
        category: TraitCategory::Outdoor,
        level1: [38, 63, 69],
        level2: [1, 31, 50],
        level3: [2, 8, 17],
    },
    CategoryQuestions {
        category: TraitCategory::Technology,
        level1: [24, 39, 42],
        level2: [16, 49, 70],
        level3: [5, 14, 61],
    },
];

/// Looks up the question assignment for a category. The table is laid out
/// in `TraitCategory::ALL` order, so this is a direct index.
pub fn assignments_for(category: TraitCategory) -> &'static CategoryQuestions {
    &QUESTION_ASSIGNMENTS[category as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_category_order() {
        for category in TraitCategory::ALL {
            assert_eq!(assignments_for(category).category, category);
        }
    }

    #[test]
    fn test_all_indices_in_range() {
        for entry in &QUESTION_ASSIGNMENTS {
            for level in Level::ALL {
                for index in entry.level(level) {
                    assert!(index < QUESTION_COUNT, "index {index} out of range");
                }
            }
        }
    }

    #[test]
    fn test_coverage_matches_authored_table() {
        // The authored mapping reuses a handful of indices across categories
        // (2, 7, and the 11/29/41 block), which leaves exactly five
        // questions outside every category. Guard the table against edits
        // that silently change that coverage.
        let mut assigned = [false; QUESTION_COUNT];
        for entry in &QUESTION_ASSIGNMENTS {
            for level in Level::ALL {
                for index in entry.level(level) {
                    assigned[index] = true;
                }
            }
        }
        let unassigned: Vec<usize> = (0..QUESTION_COUNT).filter(|&i| !assigned[i]).collect();
        assert_eq!(unassigned, vec![6, 26, 47, 55, 56]);
    }

    #[test]
    fn test_level_weights() {
        assert_eq!(Level::One.weight(), 3);
        assert_eq!(Level::Two.weight(), 2);
        assert_eq!(Level::Three.weight(), 1);
    }
}
