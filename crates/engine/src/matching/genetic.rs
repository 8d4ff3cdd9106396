//! Genetic Matcher — generational search over triples of catalog indices.
//!
//! Each individual is a triple of job indices; fitness is the average match
//! percentage of its three jobs against the person's profile. Generations
//! keep the two fittest individuals unchanged and refill the rest through
//! roulette selection, single-point crossover, and a one-gene mutation per
//! offspring. After the final generation the population is ranked and the
//! first three unique job names are returned.

use std::cmp::Ordering;

use rand::Rng;
use tracing::debug;

use crate::config::GaConfig;
use crate::errors::EngineError;
use crate::matching::similarity::match_percentage;
use crate::models::job::{JobMatch, JobRecord};
use crate::models::traits::TraitVector;

/// Genes per individual: the matcher looks for the best triple.
const GENOME_LENGTH: usize = 3;
/// Individuals carried unchanged into the next generation.
const ELITE_COUNT: usize = 2;
/// Unique jobs collected from the final population.
const RESULT_SIZE: usize = 3;

/// A candidate solution: three catalog indices. Duplicate genes are allowed
/// during the search and only deduplicated at result extraction.
type Individual = [usize; GENOME_LENGTH];

/// Fitness of one individual, with the per-job breakdown kept for result
/// extraction.
#[derive(Debug, Clone)]
struct Fitness {
    average: f64,
    details: Vec<JobMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Searches the catalog for the best-matching triple of professions.
///
/// Returns up to [`RESULT_SIZE`] unique jobs in the order they appear while
/// scanning the final population from fittest to least fit. Fewer entries
/// come back when the catalog or population is too small to produce three
/// unique names. The caller supplies the random source, so a seeded
/// generator reproduces a run exactly.
pub fn match_jobs(
    person: &TraitVector,
    jobs: &[JobRecord],
    config: &GaConfig,
    rng: &mut impl Rng,
) -> Result<Vec<JobMatch>, EngineError> {
    if jobs.is_empty() {
        return Err(EngineError::NoJobsAvailable);
    }

    let mut population = initialize_population(config.population_size, jobs.len(), rng);

    for generation in 0..config.num_generations {
        let fitness_scores = evaluate_all(&population, person, jobs);
        let sorted_population = sort_by_fitness(&population, person, jobs);

        // Elitism: the two fittest survive unchanged.
        let elite = ELITE_COUNT.min(sorted_population.len());
        let mut new_population: Vec<Individual> = sorted_population[..elite].to_vec();

        while new_population.len() < config.population_size {
            let (parent1, parent2) = select_parents(&sorted_population, &fitness_scores, rng);
            let (mut offspring1, mut offspring2) = crossover(&parent1, &parent2, rng);
            mutate(&mut offspring1, jobs.len(), rng);
            mutate(&mut offspring2, jobs.len(), rng);
            new_population.push(offspring1);
            new_population.push(offspring2);
        }
        // Offspring arrive in pairs; an odd population size would otherwise
        // grow by one each generation.
        new_population.truncate(config.population_size);

        let best = fitness_scores
            .iter()
            .map(|f| f.average)
            .fold(f64::NEG_INFINITY, f64::max);
        debug!(generation, best_fitness = best, "generation complete");

        population = new_population;
    }

    Ok(extract_unique_jobs(&population, person, jobs))
}

// ────────────────────────────────────────────────────────────────────────────
// GA building blocks
// ────────────────────────────────────────────────────────────────────────────

/// Uniform random triples, drawn with replacement from the catalog.
fn initialize_population(
    size: usize,
    num_jobs: usize,
    rng: &mut impl Rng,
) -> Vec<Individual> {
    (0..size)
        .map(|_| std::array::from_fn(|_| rng.gen_range(0..num_jobs)))
        .collect()
}

/// Average match percentage across the individual's three jobs, keeping the
/// per-job breakdown.
fn evaluate(individual: &Individual, person: &TraitVector, jobs: &[JobRecord]) -> Fitness {
    let details: Vec<JobMatch> = individual
        .iter()
        .map(|&index| JobMatch {
            job: jobs[index].job_name.clone(),
            percentage: match_percentage(person, &jobs[index].prerequisites),
        })
        .collect();
    let average =
        details.iter().map(|m| m.percentage).sum::<f64>() / GENOME_LENGTH as f64;
    Fitness { average, details }
}

fn evaluate_all(
    population: &[Individual],
    person: &TraitVector,
    jobs: &[JobRecord],
) -> Vec<Fitness> {
    population
        .iter()
        .map(|individual| evaluate(individual, person, jobs))
        .collect()
}

/// A copy of the population sorted fittest-first. The unsorted generation
/// order (and its fitness list) still drives roulette selection; see
/// `select_parents`.
fn sort_by_fitness(
    population: &[Individual],
    person: &TraitVector,
    jobs: &[JobRecord],
) -> Vec<Individual> {
    let mut ranked: Vec<(Individual, f64)> = population
        .iter()
        .map(|individual| (*individual, evaluate(individual, person, jobs).average))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.into_iter().map(|(individual, _)| individual).collect()
}

/// Roulette-wheel parent selection.
///
/// Selection weights come from the generation-order fitness list while the
/// drawn index is applied to the sorted population; the two orderings are
/// intentionally distinct and must not be unified without revalidating
/// match output. A non-positive fitness total makes the weighted draw
/// meaningless, so selection falls back to a uniform draw instead of
/// failing.
fn select_parents(
    sorted_population: &[Individual],
    fitness_scores: &[Fitness],
    rng: &mut impl Rng,
) -> (Individual, Individual) {
    let first = roulette_index(fitness_scores, rng);
    let second = roulette_index(fitness_scores, rng);
    (sorted_population[first], sorted_population[second])
}

fn roulette_index(fitness_scores: &[Fitness], rng: &mut impl Rng) -> usize {
    let total: f64 = fitness_scores.iter().map(|f| f.average).sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.gen_range(0..fitness_scores.len());
    }

    let mut remaining = rng.gen_range(0.0..total);
    for (index, fitness) in fitness_scores.iter().enumerate() {
        remaining -= fitness.average;
        if remaining <= 0.0 {
            return index;
        }
    }
    fitness_scores.len() - 1
}

/// Single-point crossover. The cut lands in {1, 2}, so each offspring keeps
/// at least one gene from each parent.
fn crossover(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut impl Rng,
) -> (Individual, Individual) {
    let cut = rng.gen_range(1..GENOME_LENGTH);
    let mut offspring1 = *parent1;
    let mut offspring2 = *parent2;
    for gene in cut..GENOME_LENGTH {
        offspring1[gene] = parent2[gene];
        offspring2[gene] = parent1[gene];
    }
    (offspring1, offspring2)
}

/// Replaces one uniformly-random gene with a fresh random catalog index.
fn mutate(individual: &mut Individual, num_jobs: usize, rng: &mut impl Rng) {
    let gene = rng.gen_range(0..GENOME_LENGTH);
    individual[gene] = rng.gen_range(0..num_jobs);
}

/// Final extraction: rank the population fittest-first and collect per-job
/// entries, skipping names already taken, until three unique jobs are
/// gathered or the population runs out.
fn extract_unique_jobs(
    population: &[Individual],
    person: &TraitVector,
    jobs: &[JobRecord],
) -> Vec<JobMatch> {
    let mut final_scores = evaluate_all(population, person, jobs);
    final_scores.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(Ordering::Equal)
    });

    let mut unique_jobs: Vec<JobMatch> = Vec::with_capacity(RESULT_SIZE);
    for score in &final_scores {
        for job_match in &score.details {
            if !unique_jobs.iter().any(|taken| taken.job == job_match.job) {
                unique_jobs.push(job_match.clone());
            }
            if unique_jobs.len() == RESULT_SIZE {
                return unique_jobs;
            }
        }
    }
    unique_jobs
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
