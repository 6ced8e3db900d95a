//! Recommendation engine: extraction, scoring and formatting for one resume.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::SkillCatalog;
use crate::recommendation::extractor::{ExtractedSkills, SkillExtractor};
use crate::recommendation::formatter::{FormattedRecommendations, RecommendationFormatter};
use crate::recommendation::scorer::{JobScorer, Recommendation};

/// Error body carried in place of the formatted list when formatting fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattedOutcome {
    Formatted(FormattedRecommendations),
    Failed(ErrorBody),
}

/// Full result for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub resume_text: String,
    pub extracted_skills: ExtractedSkills,
    pub recommendations: Vec<Recommendation>,
    pub formatted_recommendations: FormattedOutcome,
}

/// Owns the shared catalog and the pre-compiled extractor. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<SkillCatalog>,
    extractor: Arc<SkillExtractor>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<SkillCatalog>) -> Result<Self, regex::Error> {
        let extractor = SkillExtractor::new(&catalog)?;
        Ok(Self {
            catalog,
            extractor: Arc::new(extractor),
        })
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Scores a resume. `filename_hint` is only used for logging.
    pub fn analyze(&self, resume_text: &str, filename_hint: &str) -> RecommendationReport {
        info!(
            "Analyzing resume '{filename_hint}' ({} characters)",
            resume_text.chars().count()
        );

        let extracted_skills = self.extractor.extract(resume_text);
        info!("Extracted {} skills", extracted_skills.len());

        let recommendations = JobScorer::new(&self.catalog).recommend(resume_text, &extracted_skills);
        if let Some(top) = recommendations.first() {
            info!(
                "Top recommendation for '{filename_hint}': {} (score {}, confidence {})",
                top.job_title, top.score, top.confidence
            );
        }

        let formatted_recommendations = match RecommendationFormatter::new(&self.catalog)
            .format(&recommendations, &extracted_skills)
        {
            Ok(formatted) => FormattedOutcome::Formatted(formatted),
            Err(e) => {
                warn!("Could not format recommendations for '{filename_hint}': {e}");
                FormattedOutcome::Failed(ErrorBody {
                    error: e.to_string(),
                })
            }
        };

        RecommendationReport {
            resume_text: resume_text.to_string(),
            extracted_skills,
            recommendations,
            formatted_recommendations,
        }
    }
}
