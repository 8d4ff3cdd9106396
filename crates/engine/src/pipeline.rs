//! Job matching pipeline — one "find my jobs" user action.
//!
//! Flow: score_traits → round the profile to whole points → match_jobs.

use rand::Rng;
use tracing::info;

use crate::config::GaConfig;
use crate::errors::EngineError;
use crate::matching::genetic::match_jobs;
use crate::models::job::{JobMatch, JobRecord};
use crate::scoring::scorer::{score_traits, AnswerSet};

/// Scores a questionnaire sheet and matches the resulting profile against
/// the catalog.
///
/// Stored profiles keep two decimal places; the matcher receives whole
/// percentages, the same conversion the stored profile goes through on its
/// way to a matching run. The two failure modes stay distinct so callers
/// can redirect the user to the questionnaire
/// ([`EngineError::InsufficientTraitData`]) or report an unpopulated
/// catalog ([`EngineError::NoJobsAvailable`]).
pub fn find_suitable_professions(
    answers: &AnswerSet,
    jobs: &[JobRecord],
    config: &GaConfig,
    rng: &mut impl Rng,
) -> Result<Vec<JobMatch>, EngineError> {
    let report = score_traits(answers)?;
    let person = report.percentages.rounded();

    info!(
        answered = answers.len(),
        catalog = jobs.len(),
        generations = config.num_generations,
        population = config.population_size,
        "matching professions"
    );

    let matches = match_jobs(&person, jobs, config, rng)?;
    info!(matched = matches.len(), "matching complete");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traits::{TraitCategory, TraitVector};
    use crate::scoring::questionnaire::QUESTION_COUNT;
    use crate::scoring::scorer::Answer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uniform_sheet(answer: Answer) -> AnswerSet {
        let mut set = AnswerSet::new();
        for index in 0..QUESTION_COUNT {
            set.insert(index, answer).unwrap();
        }
        set
    }

    fn job(name: &str, prerequisites: TraitVector) -> JobRecord {
        JobRecord {
            job_name: name.to_string(),
            prerequisites,
        }
    }

    fn config(num_generations: usize, population_size: usize) -> GaConfig {
        GaConfig {
            num_generations,
            population_size,
        }
    }

    #[test]
    fn test_all_no_sheet_fails_before_matching() {
        // Scoring fails first, even with an empty catalog: the caller is
        // told to redo the questionnaire, not to populate jobs.
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            find_suitable_professions(&uniform_sheet(Answer::No), &[], &config(5, 10), &mut rng),
            Err(EngineError::InsufficientTraitData)
        );
    }

    #[test]
    fn test_valid_sheet_with_empty_catalog_reports_no_jobs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            find_suitable_professions(&uniform_sheet(Answer::Yes), &[], &config(5, 10), &mut rng),
            Err(EngineError::NoJobsAvailable)
        );
    }

    #[test]
    fn test_uniform_sheet_matches_flat_profile_best() {
        // A uniform sheet scores 12.5 everywhere, rounded to 13 for the
        // matcher. The flat-13 job is an exact fit.
        let flat = TraitVector::from_fn(|_| 13.0);
        let spiky = {
            let mut v = TraitVector::default();
            v.set(TraitCategory::Technology, 100.0);
            v
        };
        let jobs = vec![job("Generalist", flat), job("Specialist", spiky)];

        let mut rng = StdRng::seed_from_u64(42);
        let matches =
            find_suitable_professions(&uniform_sheet(Answer::Unsure), &jobs, &config(40, 20), &mut rng)
                .unwrap();

        assert_eq!(matches.len(), 2);
        let generalist = matches.iter().find(|m| m.job == "Generalist").unwrap();
        assert_eq!(generalist.percentage, 100.0);
    }

    #[test]
    fn test_pipeline_is_deterministic_per_seed() {
        let jobs: Vec<JobRecord> = (0..10)
            .map(|i| {
                let mut v = TraitVector::default();
                v.set(TraitCategory::Business, f64::from(i) * 10.0);
                v.set(TraitCategory::Service, 100.0 - f64::from(i) * 10.0);
                job(&format!("Job {i}"), v)
            })
            .collect();

        let sheet = uniform_sheet(Answer::Yes);
        let mut first_rng = StdRng::seed_from_u64(123);
        let mut second_rng = StdRng::seed_from_u64(123);

        let first =
            find_suitable_professions(&sheet, &jobs, &config(20, 14), &mut first_rng).unwrap();
        let second =
            find_suitable_professions(&sheet, &jobs, &config(20, 14), &mut second_rng).unwrap();
        assert_eq!(first, second);
    }
}
