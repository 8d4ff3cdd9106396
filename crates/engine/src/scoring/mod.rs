// Trait scoring: questionnaire structure + answer scoring.
pub mod questionnaire;
pub mod scorer;
