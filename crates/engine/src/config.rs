use anyhow::{Context, Result};

/// Genetic matcher tuning, loaded from environment variables or defaults.
///
/// Defaults follow the production matcher invocation: 100 generations over
/// a population of 50 candidate triples.
#[derive(Debug, Clone)]
pub struct GaConfig {
    pub num_generations: usize,
    pub population_size: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 50,
        }
    }
}

impl GaConfig {
    /// Reads `GA_NUM_GENERATIONS` and `GA_POPULATION_SIZE`, keeping the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(Self {
            num_generations: env_usize("GA_NUM_GENERATIONS", defaults.num_generations)?,
            population_size: env_usize("GA_POPULATION_SIZE", defaults.population_size)?,
        })
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("'{key}' must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
