//! Job scoring: turns extracted skills into ranked job-title recommendations.
//!
//! Score per title (every title in the catalog is scored):
//! - +1.0 per extracted skill listed for the title
//! - +5.0 when the title itself appears in the resume text
//! - +0.5 per listed skill found anywhere in the text as a substring,
//!   whether or not it was extracted
//!
//! Confidence = 0.5 + (score / max(20, best score)) × 0.45, clamped to
//! [0.5, 0.95] and rounded to 2 decimals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{JobProfile, SkillCatalog};
use crate::recommendation::extractor::ExtractedSkills;

pub const MAX_RECOMMENDATIONS: usize = 3;

const MIN_SCORE_CEILING: f64 = 20.0;
const CONFIDENCE_FLOOR: f64 = 0.5;
const CONFIDENCE_CAP: f64 = 0.95;
const CONFIDENCE_SPAN: f64 = 0.45;

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub title_mention: f64,
    pub ambient_keyword: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 1.0,
            title_mention: 5.0,
            ambient_keyword: 0.5,
        }
    }
}

/// Raw score for one job title.
#[derive(Debug, Clone, PartialEq)]
pub struct JobScore {
    pub job_title: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_title: String,
    pub confidence: f64,
    pub score: f64,
    pub matching_skills: Vec<String>,
}

pub struct JobScorer<'a> {
    catalog: &'a SkillCatalog,
    weights: ScoringWeights,
}

impl<'a> JobScorer<'a> {
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self::with_weights(catalog, ScoringWeights::default())
    }

    pub fn with_weights(catalog: &'a SkillCatalog, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    /// Scores every title, in catalog order.
    pub fn score_all(&self, resume_text: &str, extracted: &ExtractedSkills) -> Vec<JobScore> {
        let text = resume_text.to_lowercase();

        self.catalog
            .profiles()
            .iter()
            .map(|profile| {
                let score = self.score_profile(profile, &text, extracted);
                debug!("Job {}: score {score}", profile.title);
                JobScore {
                    job_title: profile.title.clone(),
                    score,
                }
            })
            .collect()
    }

    /// Top recommendations by descending score. Ties keep catalog order.
    pub fn recommend(&self, resume_text: &str, extracted: &ExtractedSkills) -> Vec<Recommendation> {
        let mut scores = self.score_all(resume_text, extracted);
        let ceiling = scores
            .iter()
            .map(|s| s.score)
            .fold(MIN_SCORE_CEILING, f64::max);

        // sort_by is stable, so equal scores stay in catalog order
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        scores
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|job| {
                let matching_skills = self
                    .catalog
                    .skills_for(&job.job_title)
                    .map(|skills| matching_skills(extracted, skills))
                    .unwrap_or_default();
                Recommendation {
                    confidence: confidence(job.score, ceiling),
                    job_title: job.job_title,
                    score: job.score,
                    matching_skills,
                }
            })
            .collect()
    }

    fn score_profile(&self, profile: &JobProfile, text: &str, extracted: &ExtractedSkills) -> f64 {
        let lowered: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
        let mut score = 0.0;

        for skill in extracted.iter() {
            let skill = skill.to_lowercase();
            if lowered.iter().any(|s| *s == skill) {
                score += self.weights.skill_match;
            }
        }

        if text.contains(&profile.title.to_lowercase()) {
            score += self.weights.title_mention;
        }

        for skill in &lowered {
            if text.contains(skill.as_str()) {
                score += self.weights.ambient_keyword;
            }
        }

        score
    }
}

/// Extracted skills that belong to a title's skill list, compared case-insensitively.
pub fn matching_skills(extracted: &ExtractedSkills, job_skills: &[String]) -> Vec<String> {
    let lowered: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    extracted
        .iter()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

pub fn confidence(score: f64, ceiling: f64) -> f64 {
    let ceiling = ceiling.max(MIN_SCORE_CEILING);
    let raw = CONFIDENCE_FLOOR + (score / ceiling) * CONFIDENCE_SPAN;
    let clamped = raw.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CAP);
    // `{:.2}` rounds the exact binary value; scaling by 100 first would turn
    // 0.72499.. into 72.5 and round it up.
    format!("{clamped:.2}").parse().unwrap_or(clamped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JobProfile;
    use crate::recommendation::extractor::SkillExtractor;

    fn profile(title: &str, skills: &[&str]) -> JobProfile {
        JobProfile {
            title: title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            missing_skills: vec![],
            companies: vec![],
        }
    }

    fn extracted(skills: &[&str]) -> ExtractedSkills {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skill_match_and_ambient_bonus() {
        let catalog = SkillCatalog::new(vec![profile("Baker", &["bread", "flour"])]).unwrap();
        let scorer = JobScorer::new(&catalog);
        let scores = scorer.score_all("bread and flour", &extracted(&["bread", "flour"]));
        // 2 × 1.0 skill match + 2 × 0.5 ambient
        assert_eq!(scores[0].score, 3.0);
    }

    #[test]
    fn test_ambient_bonus_counts_unextracted_substrings() {
        let catalog = SkillCatalog::new(vec![profile("Coder", &["go"])]).unwrap();
        let scorer = JobScorer::new(&catalog);
        // "go" is inside "ongoing": not extracted, still an ambient hit
        let scores = scorer.score_all("ongoing work", &ExtractedSkills::default());
        assert_eq!(scores[0].score, 0.5);
    }

    #[test]
    fn test_title_mention_adds_exactly_five() {
        let catalog = SkillCatalog::new(vec![
            profile("Baker", &["ovens"]),
            profile("Brewer", &["ovens"]),
        ])
        .unwrap();
        let scorer = JobScorer::new(&catalog);
        let scores = scorer.score_all("former brewer", &ExtractedSkills::default());
        assert_eq!(scores[1].score - scores[0].score, 5.0);

        let recs = scorer.recommend("former brewer", &ExtractedSkills::default());
        assert_eq!(recs[0].job_title, "Brewer");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = SkillCatalog::new(vec![
            profile("A", &["x1"]),
            profile("B", &["x2"]),
            profile("C", &["x3"]),
            profile("D", &["x4"]),
        ])
        .unwrap();
        let recs = JobScorer::new(&catalog).recommend("", &ExtractedSkills::default());
        let titles: Vec<&str> = recs.iter().map(|r| r.job_title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_at_most_three_recommendations() {
        let recs = JobScorer::new(&SkillCatalog::builtin()).recommend(
            "python sql java chef baking marketing",
            &ExtractedSkills::default(),
        );
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_empty_text_scores_zero_with_floor_confidence() {
        let catalog = SkillCatalog::builtin();
        let scorer = JobScorer::new(&catalog);
        let scores = scorer.score_all("", &ExtractedSkills::default());
        assert!(scores.iter().all(|s| s.score == 0.0));

        let recs = scorer.recommend("", &ExtractedSkills::default());
        assert_eq!(recs.len(), 3);
        for rec in &recs {
            assert_eq!(rec.confidence, 0.5);
            assert!(rec.matching_skills.is_empty());
        }
        assert_eq!(recs[0].job_title, "Data Scientist");
    }

    #[test]
    fn test_confidence_uses_minimum_ceiling() {
        assert_eq!(confidence(0.0, 0.0), 0.5);
        // 0.5 + (13.5 / 20) × 0.45 = 0.80375
        assert_eq!(confidence(13.5, 13.5), 0.8);
        assert_eq!(confidence(20.0, 20.0), 0.95);
    }

    #[test]
    fn test_confidence_bounded() {
        for score in [0.0, 1.0, 7.5, 19.0, 20.0, 55.5, 400.0] {
            let c = confidence(score, 400.0);
            assert!((0.5..=0.95).contains(&c), "confidence {c} out of range");
        }
        assert_eq!(confidence(40.0, 40.0), 0.95);
    }

    #[test]
    fn test_confidence_rounds_binary_value_not_scaled_value() {
        // 0.5 + 0.5 × 0.45 is stored as 0.72499999999999997..
        assert_eq!(confidence(10.0, 20.0), 0.72);
        // 0.5 + 0.7 × 0.45 is stored just under 0.815
        assert_eq!(confidence(14.0, 20.0), 0.81);
        assert_eq!(confidence(5.0, 20.0), 0.61);
    }

    #[test]
    fn test_custom_weights_change_scores() {
        let catalog = SkillCatalog::new(vec![profile("Baker", &["bread", "flour"])]).unwrap();
        let weights = ScoringWeights {
            skill_match: 2.0,
            title_mention: 10.0,
            ambient_keyword: 0.0,
        };
        let scores = JobScorer::with_weights(&catalog, weights)
            .score_all("baker: bread and flour", &extracted(&["bread", "flour"]));
        assert_eq!(scores[0].score, 14.0);
    }

    #[test]
    fn test_matching_skills_is_case_insensitive_intersection() {
        let job = vec!["GAAP".to_string(), "excel".to_string()];
        let found = matching_skills(&extracted(&["gaap", "Excel", "sql"]), &job);
        assert_eq!(found, vec!["gaap", "Excel"]);
    }

    #[test]
    fn test_software_engineer_resume_ranks_first() {
        let catalog = SkillCatalog::builtin();
        let text = "Experienced Python developer building REST API microservices with AWS, \
                    Docker, and Git, doing full stack web development";
        let skills = SkillExtractor::new(&catalog).unwrap().extract(text);
        let recs = JobScorer::new(&catalog).recommend(text, &skills);

        let top = &recs[0];
        assert_eq!(top.job_title, "Software Engineer");
        assert!(top.confidence >= 0.5);
        for expected in ["python", "api", "aws", "microservices", "git", "full stack", "web"] {
            assert!(
                top.matching_skills.iter().any(|s| s == expected),
                "missing {expected} in {:?}",
                top.matching_skills
            );
        }
        assert!(!top.matching_skills.iter().any(|s| s == "docker"));
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let catalog = SkillCatalog::builtin();
        let scorer = JobScorer::new(&catalog);
        let text = "Sous chef with banquet, buffet and plating experience";
        let skills = SkillExtractor::new(&catalog).unwrap().extract(text);
        assert_eq!(scorer.recommend(text, &skills), scorer.recommend(text, &skills));
    }
}
