use thiserror::Error;

/// Engine-level error type returned by the scoring and matching contracts.
///
/// `InsufficientTraitData` is distinct from a zero-percentage result so
/// callers can send the user back to the questionnaire instead of matching
/// against a meaningless profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Insufficient trait data: the questionnaire produced no signal")]
    InsufficientTraitData,

    #[error("No jobs available for matching")]
    NoJobsAvailable,

    #[error("Question index {0} out of range (expected 0..72)")]
    QuestionIndexOutOfRange(usize),
}
