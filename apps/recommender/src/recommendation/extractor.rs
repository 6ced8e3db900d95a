//! Skill extraction: finds catalog skill phrases in free resume text.
//!
//! Two passes over the catalog, in this order:
//! 1. multi-word phrases: case-insensitive substring containment
//! 2. single-word phrases: case-insensitive match anchored at word boundaries,
//!    so "go" never fires inside "ongoing" or "mongo"
//!
//! Results keep the catalog's canonical spelling, deduplicated, in discovery order.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;

/// Deduplicated skill phrases found in a resume, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedSkills(Vec<String>);

impl ExtractedSkills {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    fn insert(&mut self, skill: &str) {
        if !self.contains(skill) {
            self.0.push(skill.to_string());
        }
    }
}

impl FromIterator<String> for ExtractedSkills {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut skills = ExtractedSkills::default();
        for skill in iter {
            skills.insert(&skill);
        }
        skills
    }
}

/// A single-word skill with its pre-compiled boundary pattern.
#[derive(Debug, Clone)]
struct WordPattern {
    skill: String,
    pattern: Regex,
}

/// Pre-compiled matcher over every skill phrase in the catalog.
///
/// Skills are global: a phrase is matched once no matter how many job titles list it.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    /// (canonical phrase, lowercase phrase)
    phrases: Vec<(String, String)>,
    words: Vec<WordPattern>,
}

impl SkillExtractor {
    pub fn new(catalog: &SkillCatalog) -> Result<Self, regex::Error> {
        let mut seen = HashSet::new();
        let mut phrases = Vec::new();
        let mut words = Vec::new();

        for profile in catalog.profiles() {
            for skill in &profile.skills {
                if !seen.insert(skill.as_str()) {
                    continue;
                }
                match skill.split_whitespace().count() {
                    0 => {}
                    1 => {
                        let pattern = format!(r"\b{}\b", regex::escape(&skill.to_lowercase()));
                        words.push(WordPattern {
                            skill: skill.clone(),
                            pattern: Regex::new(&pattern)?,
                        });
                    }
                    _ => phrases.push((skill.clone(), skill.to_lowercase())),
                }
            }
        }

        Ok(Self { phrases, words })
    }

    pub fn extract(&self, resume_text: &str) -> ExtractedSkills {
        let mut found = ExtractedSkills::default();
        if resume_text.is_empty() {
            return found;
        }

        let text = resume_text.to_lowercase();

        for (skill, lowered) in &self.phrases {
            if text.contains(lowered.as_str()) {
                found.insert(skill);
            }
        }

        for word in &self.words {
            if word.pattern.is_match(&text) {
                found.insert(&word.skill);
            }
        }

        found
    }
}
