use serde::{Deserialize, Serialize};

use crate::models::traits::TraitVector;

/// One catalog entry as authored by administrators.
///
/// The catalog rows carry many descriptive fields (salary, education,
/// standard day, ...); only the unique name and the prerequisite vector
/// feed the matcher, so everything else is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "jobName")]
    pub job_name: String,
    #[serde(rename = "Prerequisites", default)]
    pub prerequisites: TraitVector,
}

/// One ranked entry of the matcher output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: String,
    pub percentage: f64,
}
