use crate::models::traits::{TraitCategory, TraitVector};

/// Largest possible absolute difference across the 8 categories, at 100
/// percentage points each.
const MAX_DIFFERENCE: f64 = 800.0;

/// Match percentage between a person's profile and a job's prerequisites:
/// `(1 - Σ|p - j| / 800) × 100`.
///
/// Symmetric, and exactly 100 for identical vectors. Deliberately
/// unclamped: prerequisite vectors authored outside 0..100 push the result
/// negative, and the matcher relies on that ordering rather than a floor.
pub fn match_percentage(person: &TraitVector, job: &TraitVector) -> f64 {
    let total_difference: f64 = TraitCategory::ALL
        .iter()
        .map(|&category| (person.get(category) - job.get(category)).abs())
        .sum();
    (1.0 - total_difference / MAX_DIFFERENCE) * 100.0
}
