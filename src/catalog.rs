//! Business Model Catalog
//!
//! Loads the fixed list of business models scored against every quiz. The
//! default catalog is compiled into the binary; a JSON file with the same shape
//! can replace it at start-up.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScoringError};
use crate::metrics::{Attribute, Dimension};
use crate::quiz::{Collaboration, IncomeTimeline, LearningPreference, MainMotivation, WorkStructure};

const BUILTIN_CATALOG: &str = include_str!("../data/business_models.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    Content,
    Commerce,
    Services,
    Technology,
    Sales,
}

/// One entrepreneurial path and the profile it demands of its owner
///
/// Amounts use the same native units as the quiz; 1-5 fields are demands on
/// the same scale as the matching quiz ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessModel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ModelCategory,
    /// Typical monthly income ceiling after the first year, USD
    pub income_potential: u32,
    /// USD needed to get started
    pub startup_cost: u32,
    pub hours_per_week: u32,
    pub time_to_first_income: IncomeTimeline,
    pub tech_skill: u8,
    pub tool_intensity: u8,
    pub organization: u8,
    pub risk_level: u8,
    pub selling_intensity: u8,
    /// How much the owner has to be the public face
    pub visibility: u8,
    pub creativity: u8,
    /// Self-direction required
    pub autonomy: u8,
    pub consistency: u8,
    pub experimentation: u8,
    pub structure: WorkStructure,
    pub collaboration: Collaboration,
    pub motivations: Vec<MainMotivation>,
    pub learning_styles: Vec<LearningPreference>,
    /// Per-attribute weight overrides
    #[serde(default)]
    pub weights: FxHashMap<Attribute, f64>,
}

impl BusinessModel {
    /// Effective weight for an attribute (override or default)
    pub fn weight_for(&self, attribute: Attribute) -> f64 {
        self.weights
            .get(&attribute)
            .copied()
            .unwrap_or_else(|| attribute.default_weight())
    }

    fn validate(&self) -> Result<()> {
        let ratings = [
            ("tech_skill", self.tech_skill),
            ("tool_intensity", self.tool_intensity),
            ("organization", self.organization),
            ("risk_level", self.risk_level),
            ("selling_intensity", self.selling_intensity),
            ("visibility", self.visibility),
            ("creativity", self.creativity),
            ("autonomy", self.autonomy),
            ("consistency", self.consistency),
            ("experimentation", self.experimentation),
        ];
        for (field, value) in ratings {
            if !(1..=5).contains(&value) {
                return Err(ScoringError::catalog(format!(
                    "model '{}': {} must be between 1 and 5, got {}",
                    self.id, field, value
                )));
            }
        }

        for (attribute, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ScoringError::catalog(format!(
                    "model '{}': weight for {:?} must be a non-negative number",
                    self.id, attribute
                )));
            }
        }

        // A dimension with no weight has no score to display or explain
        for dimension in Dimension::ALL {
            let total: f64 = Attribute::ALL
                .iter()
                .filter(|a| a.dimension() == dimension)
                .map(|a| self.weight_for(*a))
                .sum();
            if total <= 0.0 {
                return Err(ScoringError::catalog(format!(
                    "model '{}': every {} weight is zero",
                    self.id,
                    dimension.display_name()
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    models: Vec<BusinessModel>,
}

/// Validated, ordered list of business models
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<BusinessModel>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// The catalog compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!("Loaded {} business models from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_models(file.models)
    }

    pub fn from_models(models: Vec<BusinessModel>) -> Result<Self> {
        if models.is_empty() {
            return Err(ScoringError::catalog("catalog contains no business models"));
        }

        let mut seen = FxHashSet::default();
        let mut index = FxHashMap::default();
        for (position, model) in models.iter().enumerate() {
            model.validate()?;
            if !seen.insert(model.id.as_str()) {
                return Err(ScoringError::catalog(format!("duplicate model id '{}'", model.id)));
            }
            index.insert(model.id.clone(), position);
        }

        Ok(Self { models, index })
    }

    pub fn get(&self, id: &str) -> Option<&BusinessModel> {
        self.index.get(id).map(|&i| &self.models[i])
    }

    /// Models in catalog order (the tie-break order for rankings)
    pub fn models(&self) -> &[BusinessModel] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
