//! Trait Scorer — converts raw RAMAK answers into normalized trait
//! percentages.
//!
//! Each category accumulates raw points (Yes 2 / Unsure 1 / No 0) over its
//! 9 assigned questions and a weighted sum over its 3 priority levels. The
//! external contract is the per-category share of the grand weighted total;
//! the per-category breakdown is kept because the questionnaire result view
//! consumes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::models::traits::{TraitCategory, TraitVector};
use crate::scoring::questionnaire::{assignments_for, Level, QUESTION_COUNT};

/// Maximum raw score per category: 9 questions at 2 points each.
const MAX_RAW_SCORE: f64 = 18.0;
/// Maximum weighted score per category: 3 questions at 2 points per level,
/// weighted 3/2/1.
const MAX_WEIGHTED_SCORE: f64 = (3 * 2 * 3 + 2 * 2 * 3 + 1 * 2 * 3) as f64;

// ────────────────────────────────────────────────────────────────────────────
// Answers
// ────────────────────────────────────────────────────────────────────────────

/// One of the three symbolic answers to a RAMAK question. The serde codes
/// match the questionnaire wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "?")]
    Unsure,
    #[serde(rename = "N")]
    No,
}

impl Answer {
    /// Raw point value: Yes 2, Unsure 1, No 0.
    pub fn points(&self) -> u32 {
        match self {
            Answer::Yes => 2,
            Answer::Unsure => 1,
            Answer::No => 0,
        }
    }
}

/// Sparse answer map keyed by question index (0..72). Unanswered questions
/// are simply absent and contribute nothing to scoring; the fixed
/// normalization denominators assume a complete sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<usize, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answer. Out-of-range indices are a caller contract
    /// violation and fail fast.
    pub fn insert(&mut self, index: usize, answer: Answer) -> Result<(), EngineError> {
        if index >= QUESTION_COUNT {
            return Err(EngineError::QuestionIndexOutOfRange(index));
        }
        self.answers.insert(index, answer);
        Ok(())
    }

    /// Builds a set from a positional response sheet, skipping `None` slots.
    pub fn from_responses(responses: &[Option<Answer>]) -> Result<Self, EngineError> {
        let mut set = Self::new();
        for (index, response) in responses.iter().enumerate() {
            if let Some(answer) = response {
                set.insert(index, *answer)?;
            }
        }
        Ok(set)
    }

    pub fn get(&self, index: usize) -> Option<Answer> {
        self.answers.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer output
// ────────────────────────────────────────────────────────────────────────────

/// Per-category scoring breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: TraitCategory,
    /// Raw points as a percentage of the 18-point category maximum.
    pub normalized_raw: f64,
    /// Weighted points as a percentage of the 36-point category maximum.
    pub normalized_weighted: f64,
    /// Weighted points before normalization; feeds the grand-total shares.
    pub total_weighted: u32,
}

/// Scorer output: the breakdown per category plus each category's share of
/// the grand weighted total, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitReport {
    /// One entry per category, in `TraitCategory::ALL` order.
    pub scores: Vec<CategoryScore>,
    pub percentages: TraitVector,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a questionnaire sheet into a trait profile.
///
/// A grand weighted total of zero (all answers missing or "No") means the
/// category shares are undefined; that surfaces as
/// `EngineError::InsufficientTraitData` instead of dividing by zero.
pub fn score_traits(answers: &AnswerSet) -> Result<TraitReport, EngineError> {
    let mut scores = Vec::with_capacity(TraitCategory::ALL.len());
    let mut grand_total: u32 = 0;

    for category in TraitCategory::ALL {
        let assignment = assignments_for(category);
        let mut total_raw: u32 = 0;
        let mut total_weighted: u32 = 0;

        for level in Level::ALL {
            for index in assignment.level(level) {
                if let Some(answer) = answers.get(index) {
                    total_raw += answer.points();
                    total_weighted += answer.points() * level.weight();
                }
            }
        }

        grand_total += total_weighted;
        scores.push(CategoryScore {
            category,
            normalized_raw: f64::from(total_raw) / MAX_RAW_SCORE * 100.0,
            normalized_weighted: f64::from(total_weighted) / MAX_WEIGHTED_SCORE * 100.0,
            total_weighted,
        });
    }

    if grand_total == 0 {
        return Err(EngineError::InsufficientTraitData);
    }

    let percentages = TraitVector::from_fn(|category| {
        let share = f64::from(scores[category as usize].total_weighted)
            / f64::from(grand_total)
            * 100.0;
        round2(share)
    });

    debug!(
        answered = answers.len(),
        grand_total, "questionnaire scored"
    );

    Ok(TraitReport {
        scores,
        percentages,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
