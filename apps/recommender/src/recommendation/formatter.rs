//! Presentation formatting for ranked recommendations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::SkillCatalog;
use crate::recommendation::extractor::ExtractedSkills;
use crate::recommendation::scorer::Recommendation;

const MAX_DISPLAY_SKILLS: usize = 4;
const MIN_DISPLAY_SKILLS: usize = 2;
const INSIGHT_ITEMS: usize = 3;

/// Shown when a recommendation has no matching skills at all.
pub const GENERIC_SKILLS: &[&str] = &["Communication", "Problem Solving", "Teamwork", "Adaptability"];

const ROLE_DESCRIPTION: &str = "This role matches your resume profile and skills.";
const GENERIC_INSIGHT: &str = "Based on your resume, consider developing additional technical and soft skills to improve your job prospects.";

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("No recommendations available")]
    NoRecommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathEntry {
    pub title: String,
    pub provider: String,
    pub difficulty: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRecommendation {
    pub title: String,
    pub company: String,
    #[serde(rename = "match")]
    pub match_label: String,
    pub description: String,
    pub skills: Vec<String>,
    pub learning_path: Vec<LearningPathEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRecommendations {
    pub job_recommendations: Vec<FormattedRecommendation>,
    pub ai_insights: String,
}

pub struct RecommendationFormatter<'a> {
    catalog: &'a SkillCatalog,
}

impl<'a> RecommendationFormatter<'a> {
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self { catalog }
    }

    pub fn format(
        &self,
        recommendations: &[Recommendation],
        extracted: &ExtractedSkills,
    ) -> Result<FormattedRecommendations, FormatError> {
        if recommendations.is_empty() {
            return Err(FormatError::NoRecommendations);
        }

        let job_recommendations: Vec<FormattedRecommendation> = recommendations
            .iter()
            .enumerate()
            .map(|(rank, rec)| self.format_one(rank, rec))
            .collect();

        let ai_insights = match job_recommendations.first() {
            Some(top) if !extracted.is_empty() => self.insight(top),
            _ => GENERIC_INSIGHT.to_string(),
        };

        Ok(FormattedRecommendations {
            job_recommendations,
            ai_insights,
        })
    }

    /// `rank` is the 0-based position in the ranked list.
    pub fn format_one(&self, rank: usize, rec: &Recommendation) -> FormattedRecommendation {
        let missing = self.catalog.missing_skills_for(&rec.job_title);
        let top_missing = missing.first().map(String::as_str).unwrap_or("Leadership");

        FormattedRecommendation {
            title: rec.job_title.clone(),
            company: self.catalog.companies_for(&rec.job_title, rank).join(", "),
            match_label: format!("{}% Match", (rec.confidence * 100.0).round() as u32),
            description: ROLE_DESCRIPTION.to_string(),
            skills: display_skills(&rec.matching_skills),
            learning_path: vec![
                LearningPathEntry {
                    title: format!("Advanced {top_missing} Course"),
                    provider: "Professional Learning Center".to_string(),
                    difficulty: "Intermediate".to_string(),
                    description: "Enhance your career prospects with this essential skill."
                        .to_string(),
                },
                LearningPathEntry {
                    title: format!("{} Certification", rec.job_title),
                    provider: "Industry Academy".to_string(),
                    difficulty: "Advanced".to_string(),
                    description: "Get certified in key technologies for this role.".to_string(),
                },
            ],
        }
    }

    fn insight(&self, top: &FormattedRecommendation) -> String {
        let strengths: Vec<&str> = top
            .skills
            .iter()
            .take(INSIGHT_ITEMS)
            .map(String::as_str)
            .collect();
        let gaps: Vec<String> = self
            .catalog
            .missing_skills_for(&top.title)
            .into_iter()
            .take(INSIGHT_ITEMS)
            .collect();

        format!(
            "Based on your resume, you have a strong foundation in {}. \
             To increase your prospects as a {}, consider developing skills in {}.",
            strengths.join(", "),
            top.title,
            gaps.join(", ")
        )
    }
}

/// Display list for a recommendation: title-cased, at most 4, at least 2.
pub fn display_skills(matching: &[String]) -> Vec<String> {
    if matching.is_empty() {
        return GENERIC_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    let mut skills: Vec<String> = matching
        .iter()
        .take(MAX_DISPLAY_SKILLS)
        .map(|s| display_case(s))
        .collect();

    for filler in GENERIC_SKILLS.iter().take(MIN_DISPLAY_SKILLS) {
        if skills.len() >= MIN_DISPLAY_SKILLS {
            break;
        }
        skills.push(filler.to_string());
    }

    skills
}

/// All-lowercase phrases become title case; anything already mixed-case is kept.
pub fn display_case(skill: &str) -> String {
    let has_cased = skill.chars().any(char::is_alphabetic);
    let all_lower = !skill.chars().any(char::is_uppercase);
    if !(has_cased && all_lower) {
        return skill.to_string();
    }

    let mut out = String::with_capacity(skill.len());
    let mut prev_is_letter = false;
    for c in skill.chars() {
        if prev_is_letter {
            out.push(c);
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}
