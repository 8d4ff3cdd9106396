//! Career-matching engine: RAMAK trait scoring and genetic job matching.
//!
//! Two cooperating components, run in sequence per "find my jobs" action:
//!
//! 1. the trait scorer turns 72 categorical questionnaire answers into a
//!    normalized 8-dimensional personality profile;
//! 2. the genetic matcher searches the job catalog for the triple of
//!    professions whose prerequisites sit closest to that profile.
//!
//! Both are pure given a caller-supplied random source, so embedders seed
//! one generator per request and a fixed seed reproduces a run exactly.
//! Persistence, transport, and presentation all live with the caller.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod scoring;

pub use config::GaConfig;
pub use errors::EngineError;
pub use matching::genetic::match_jobs;
pub use matching::similarity::match_percentage;
pub use models::job::{JobMatch, JobRecord};
pub use models::traits::{TraitCategory, TraitVector};
pub use pipeline::find_suitable_professions;
pub use scoring::scorer::{score_traits, Answer, AnswerSet, CategoryScore, TraitReport};
