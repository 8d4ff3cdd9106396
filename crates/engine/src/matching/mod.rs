// Job matching: similarity metric + genetic search.
pub mod genetic;
pub mod similarity;
