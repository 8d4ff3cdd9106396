use std::fmt;

use serde::{Deserialize, Serialize};

/// The 8 RAMAK personality/job-field domains.
///
/// Declaration order is the display order used by questionnaire result
/// views and prerequisite charts; scoring treats every category
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    Business,
    GeneralCulture,
    ArtsAndEntertainment,
    Science,
    Organization,
    Service,
    Outdoor,
    Technology,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 8] = [
        TraitCategory::Business,
        TraitCategory::GeneralCulture,
        TraitCategory::ArtsAndEntertainment,
        TraitCategory::Science,
        TraitCategory::Organization,
        TraitCategory::Service,
        TraitCategory::Outdoor,
        TraitCategory::Technology,
    ];

    /// Spaced English name as shown to users ("General Culture").
    /// The serde representation stays compact ("GeneralCulture") to match
    /// the catalog JSON.
    pub fn label(&self) -> &'static str {
        match self {
            TraitCategory::Business => "Business",
            TraitCategory::GeneralCulture => "General Culture",
            TraitCategory::ArtsAndEntertainment => "Arts and Entertainment",
            TraitCategory::Science => "Science",
            TraitCategory::Organization => "Organization",
            TraitCategory::Service => "Service",
            TraitCategory::Outdoor => "Outdoor",
            TraitCategory::Technology => "Technology",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An 8-dimensional trait vector in percentage points.
///
/// Used both for a person's questionnaire profile and for a job's authored
/// prerequisites (the latter are not constrained to sum to 100). Keys
/// absent from a serialized vector deserialize to 0, which is also how the
/// similarity metric treats a missing category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TraitVector {
    pub business: f64,
    pub general_culture: f64,
    pub arts_and_entertainment: f64,
    pub science: f64,
    pub organization: f64,
    pub service: f64,
    pub outdoor: f64,
    pub technology: f64,
}

impl TraitVector {
    pub fn get(&self, category: TraitCategory) -> f64 {
        match category {
            TraitCategory::Business => self.business,
            TraitCategory::GeneralCulture => self.general_culture,
            TraitCategory::ArtsAndEntertainment => self.arts_and_entertainment,
            TraitCategory::Science => self.science,
            TraitCategory::Organization => self.organization,
            TraitCategory::Service => self.service,
            TraitCategory::Outdoor => self.outdoor,
            TraitCategory::Technology => self.technology,
        }
    }

    pub fn set(&mut self, category: TraitCategory, value: f64) {
        match category {
            TraitCategory::Business => self.business = value,
            TraitCategory::GeneralCulture => self.general_culture = value,
            TraitCategory::ArtsAndEntertainment => self.arts_and_entertainment = value,
            TraitCategory::Science => self.science = value,
            TraitCategory::Organization => self.organization = value,
            TraitCategory::Service => self.service = value,
            TraitCategory::Outdoor => self.outdoor = value,
            TraitCategory::Technology => self.technology = value,
        }
    }

    /// Builds a vector by evaluating `f` once per category.
    pub fn from_fn(mut f: impl FnMut(TraitCategory) -> f64) -> Self {
        let mut vector = TraitVector::default();
        for category in TraitCategory::ALL {
            vector.set(category, f(category));
        }
        vector
    }

    /// Every value rounded to the nearest whole percentage. Stored profiles
    /// keep two decimals; the matcher works on whole points.
    pub fn rounded(&self) -> Self {
        TraitVector::from_fn(|category| self.get(category).round())
    }
}
