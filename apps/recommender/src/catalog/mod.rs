//! Skill catalog: the read-only knowledge base the recommendation engine scores against.
//!
//! Every job title owns a non-empty list of skill phrases, an ordered list of
//! skill gaps, and one or more hiring companies. The catalog is built once at
//! startup and shared behind an `Arc`; nothing mutates it afterwards.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Map;
use thiserror::Error;
use tracing::{info, warn};

/// Gap list used for titles with no declared missing skills.
pub const GENERIC_MISSING_SKILLS: &[&str] =
    &["Leadership", "Advanced Technical Skills", "Project Management"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no job titles")]
    Empty,

    #[error("Catalog contains a blank job title")]
    BlankTitle,

    #[error("Job title '{0}' has no skills")]
    EmptySkills(String),

    #[error("Job title '{0}' has a blank skill phrase")]
    BlankSkill(String),
}

/// Everything the catalog knows about a single job title.
#[derive(Debug, Clone, PartialEq)]
pub struct JobProfile {
    pub title: String,
    pub skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub companies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SkillCatalog {
    profiles: Vec<JobProfile>,
}

// ────────────────────────────────────────────────────────────────────────────
// On-disk document shape
// ────────────────────────────────────────────────────────────────────────────

/// A table value that is either a bare string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    job_skills: Map<String, serde_json::Value>,
    #[serde(default)]
    missing_skills: Map<String, serde_json::Value>,
    #[serde(default)]
    companies: Map<String, serde_json::Value>,
}

impl SkillCatalog {
    /// Builds a catalog from profiles, rejecting empty or blank data.
    pub fn new(profiles: Vec<JobProfile>) -> Result<Self, CatalogError> {
        let catalog = Self { profiles };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let profiles = builtin::JOB_SKILLS
            .iter()
            .map(|(title, skills)| JobProfile {
                title: title.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                missing_skills: lookup_table(builtin::MISSING_SKILLS, title),
                companies: lookup_table(builtin::COMPANIES, title),
            })
            .collect();
        Self { profiles }
    }

    /// Parses a JSON catalog document. Key order in `job_skills` is the
    /// ranking tie-break order.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        let known: HashSet<&str> = document.job_skills.keys().map(String::as_str).collect();
        for (table, entries) in [
            ("missing_skills", &document.missing_skills),
            ("companies", &document.companies),
        ] {
            for title in entries.keys().filter(|t| !known.contains(t.as_str())) {
                warn!("Ignoring {table} entry for unknown job title '{title}'");
            }
        }

        let mut profiles = Vec::with_capacity(document.job_skills.len());
        for (title, skills) in &document.job_skills {
            let skills = normalize_list(serde_json::from_value(skills.clone())?, str::trim);
            let missing_skills = match document.missing_skills.get(title) {
                Some(v) => normalize_list(serde_json::from_value(v.clone())?, str::trim),
                None => Vec::new(),
            };
            let companies = match document.companies.get(title) {
                Some(v) => normalize_list(serde_json::from_value(v.clone())?, clean_company),
                None => Vec::new(),
            };
            profiles.push(JobProfile {
                title: title.trim().to_string(),
                skills,
                missing_skills,
                companies,
            });
        }

        Self::new(profiles)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the catalog file if one is configured, falling back to the
    /// built-in catalog on any failure.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!("No catalog file configured, using built-in catalog");
            return Self::builtin();
        };

        match Self::from_path(path) {
            Ok(catalog) => {
                info!(
                    "Loaded skill catalog from {} ({} job titles)",
                    path.display(),
                    catalog.len()
                );
                catalog
            }
            Err(e) => {
                warn!(
                    "Could not load skill catalog from {}: {e}. Using built-in catalog.",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.profiles.is_empty() {
            return Err(CatalogError::Empty);
        }
        for profile in &self.profiles {
            if profile.title.trim().is_empty() {
                return Err(CatalogError::BlankTitle);
            }
            if profile.skills.is_empty() {
                return Err(CatalogError::EmptySkills(profile.title.clone()));
            }
            if profile.skills.iter().any(|s| s.trim().is_empty()) {
                return Err(CatalogError::BlankSkill(profile.title.clone()));
            }
        }
        Ok(())
    }

    pub fn profiles(&self) -> &[JobProfile] {
        &self.profiles
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn profile(&self, title: &str) -> Option<&JobProfile> {
        self.profiles.iter().find(|p| p.title == title)
    }

    pub fn skills_for(&self, title: &str) -> Option<&[String]> {
        self.profile(title).map(|p| p.skills.as_slice())
    }

    /// Skill gaps for a title, or the generic gap list.
    pub fn missing_skills_for(&self, title: &str) -> Vec<String> {
        match self.profile(title) {
            Some(p) if !p.missing_skills.is_empty() => p.missing_skills.clone(),
            _ => GENERIC_MISSING_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Companies hiring for a title. `rank` is the 0-based position of the
    /// recommendation and only feeds the placeholder name.
    pub fn companies_for(&self, title: &str, rank: usize) -> Vec<String> {
        match self.profile(title) {
            Some(p) if !p.companies.is_empty() => p.companies.clone(),
            _ => vec![format!("Company {}", rank + 1)],
        }
    }
}

fn lookup_table(table: &[(&str, &[&str])], title: &str) -> Vec<String> {
    table
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, values)| values.iter().map(|v| v.to_string()).collect())
        .unwrap_or_default()
}

fn normalize_list(value: OneOrMany, clean: fn(&str) -> &str) -> Vec<String> {
    value
        .into_vec()
        .iter()
        .map(|s| clean(s))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Company names are sometimes stored with a trailing list separator ("Adobe, ").
fn clean_company(name: &str) -> &str {
    name.trim().trim_end_matches(',').trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 39);
    }

    #[test]
    fn test_builtin_title_order_starts_with_data_scientist() {
        let catalog = SkillCatalog::builtin();
        let titles: Vec<&str> = catalog.titles().take(4).collect();
        assert_eq!(
            titles,
            vec![
                "Data Scientist",
                "Software Engineer",
                "Product Manager",
                "UX Designer"
            ]
        );
    }

    #[test]
    fn test_builtin_titles_are_unique() {
        let catalog = SkillCatalog::builtin();
        let unique: HashSet<&str> = catalog.titles().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_builtin_every_title_has_company_and_gaps() {
        let catalog = SkillCatalog::builtin();
        for profile in catalog.profiles() {
            assert!(!profile.companies.is_empty(), "{} has no company", profile.title);
            assert!(
                !profile.missing_skills.is_empty(),
                "{} has no missing skills",
                profile.title
            );
        }
    }

    #[test]
    fn test_builtin_company_separators_are_stripped() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(
            catalog.companies_for("Graphic Designer", 0),
            vec!["Adobe".to_string(), "Canva".to_string()]
        );
        assert_eq!(
            catalog.companies_for("Software Engineer", 0),
            vec!["Tech Innovations".to_string()]
        );
    }

    #[test]
    fn test_missing_skills_fallback_for_unknown_title() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(
            catalog.missing_skills_for("Astronaut"),
            vec!["Leadership", "Advanced Technical Skills", "Project Management"]
        );
    }

    #[test]
    fn test_company_fallback_uses_one_based_rank() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.companies_for("Astronaut", 2), vec!["Company 3"]);
    }

    #[test]
    fn test_from_json_normalizes_string_or_list() {
        let json = r#"{
            "job_skills": {
                "Baker": ["bread", "sourdough starter"],
                "Brewer": ["hops"]
            },
            "missing_skills": {"Baker": "Lamination"},
            "companies": {"Baker": ["Bakery One, ", "Bakery Two"], "Brewer": "Ale House"}
        }"#;
        let catalog = SkillCatalog::from_json(json).unwrap();
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(titles, vec!["Baker", "Brewer"]);
        assert_eq!(catalog.missing_skills_for("Baker"), vec!["Lamination"]);
        assert_eq!(
            catalog.companies_for("Baker", 0),
            vec!["Bakery One", "Bakery Two"]
        );
        assert_eq!(catalog.companies_for("Brewer", 0), vec!["Ale House"]);
        // No declared gaps → generic list
        assert_eq!(catalog.missing_skills_for("Brewer").len(), 3);
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let json = r#"{"job_skills": {"Zookeeper": ["animals"], "Archivist": ["records"]}}"#;
        let catalog = SkillCatalog::from_json(json).unwrap();
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(titles, vec!["Zookeeper", "Archivist"]);
    }

    #[test]
    fn test_from_json_ignores_orphan_entries() {
        let json = r#"{
            "job_skills": {"Baker": ["bread"]},
            "companies": {"Ghost": "Nowhere Inc."}
        }"#;
        let catalog = SkillCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.profile("Ghost").is_none());
    }

    #[test]
    fn test_from_json_rejects_empty_skill_list() {
        let json = r#"{"job_skills": {"Baker": []}}"#;
        let err = SkillCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySkills(t) if t == "Baker"));
    }

    #[test]
    fn test_from_json_rejects_empty_catalog() {
        let err = SkillCatalog::from_json(r#"{"job_skills": {}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_load_or_builtin_falls_back_on_missing_file() {
        let catalog = SkillCatalog::load_or_builtin(Some(Path::new("/nonexistent/catalog.json")));
        assert_eq!(catalog.len(), SkillCatalog::builtin().len());
    }

    #[test]
    fn test_load_or_builtin_falls_back_on_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"job_skills": {{"Baker": []}}}}"#).unwrap();
        let catalog = SkillCatalog::load_or_builtin(Some(file.path()));
        assert_eq!(catalog.len(), 39);
    }

    #[test]
    fn test_load_or_builtin_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"job_skills": {{"Baker": ["bread"]}}}}"#).unwrap();
        let catalog = SkillCatalog::load_or_builtin(Some(file.path()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skills_for("Baker").unwrap(), ["bread".to_string()]);
    }
}
