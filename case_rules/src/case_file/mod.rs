//! Case configuration - everything that describes one mystery before play starts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::entities::Suspect;
use crate::error::{CaseError, CaseResult};
use crate::vocabulary::{FactValue, Pattern, RelationType};

const BUILTIN_CASE: &str = include_str!("../../cases/manor.toml");

/// How the final reveal reads the list of suspicious subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Walk suspects in name order and stop at the first wrong accusation.
    FirstFound,
    /// Only a single suspicious subject closes the case.
    #[default]
    RequireUnique,
}

/// Settings for the contradiction-detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceSettings {
    #[serde(default = "default_detect_contradictions")]
    pub detect_contradictions: bool,

    /// Relation whose conflicting claims mark a subject suspicious.
    #[serde(default = "default_contradiction_relation")]
    pub contradiction_relation: RelationType,
}

fn default_detect_contradictions() -> bool {
    true
}

fn default_contradiction_relation() -> RelationType {
    RelationType::Alibi
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            detect_contradictions: default_detect_contradictions(),
            contradiction_relation: default_contradiction_relation(),
        }
    }
}

/// A suspect as written in the case file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub relationship: String,
}

impl SuspectSpec {
    pub fn to_suspect(&self) -> Suspect {
        Suspect::new(self.name.clone())
            .with_description(self.description.clone())
            .with_relationship(self.relationship.clone())
    }
}

/// A ground fact as written in the case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSpec {
    pub relation: RelationType,
    pub subject: String,
    pub object: FactValue,
    #[serde(default)]
    pub negated: bool,
}

impl FactSpec {
    pub fn new(relation: RelationType, subject: impl Into<String>, object: impl Into<FactValue>) -> Self {
        Self {
            relation,
            subject: subject.into(),
            object: object.into(),
            negated: false,
        }
    }
}

/// An implication rule as written in the case file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    #[serde(default)]
    pub when: Vec<Pattern>,
    pub then: Pattern,
}

/// Something the player can find while searching a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueSpec {
    pub description: String,
    #[serde(default)]
    pub fact: Option<FactSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default)]
    pub clues: Vec<ClueSpec>,
}

impl RoomSpec {
    /// Room names match ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// The complete description of a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub title: String,
    pub culprit: String,

    #[serde(default)]
    pub reveal_policy: RevealPolicy,

    #[serde(default)]
    pub inference: InferenceSettings,

    pub suspects: Vec<SuspectSpec>,

    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    /// Facts known before the investigation starts.
    #[serde(default)]
    pub facts: Vec<FactSpec>,

    #[serde(default)]
    pub rooms: Vec<RoomSpec>,
}

impl CaseConfig {
    /// Parse and validate a case from TOML text.
    pub fn from_toml_str(text: &str) -> CaseResult<Self> {
        let config: CaseConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a case file.
    pub fn from_path(path: impl AsRef<Path>) -> CaseResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The manor case shipped with the crate.
    pub fn builtin() -> CaseResult<Self> {
        Self::from_toml_str(BUILTIN_CASE)
    }

    /// Check roster consistency.
    pub fn validate(&self) -> CaseResult<()> {
        let mut names = HashSet::new();
        for suspect in &self.suspects {
            if !names.insert(suspect.name.as_str()) {
                return Err(CaseError::DuplicateSuspect(suspect.name.clone()));
            }
        }

        if !names.contains(self.culprit.as_str()) {
            return Err(CaseError::UnknownCulprit(self.culprit.clone()));
        }

        for fact in &self.facts {
            if !names.contains(fact.subject.as_str()) {
                return Err(CaseError::UnknownSuspect {
                    context: "initial fact".to_string(),
                    name: fact.subject.clone(),
                });
            }
        }

        for room in &self.rooms {
            for fact in room.clues.iter().filter_map(|c| c.fact.as_ref()) {
                if !names.contains(fact.subject.as_str()) {
                    return Err(CaseError::UnknownSuspect {
                        context: format!("clue in {}", room.name),
                        name: fact.subject.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Build suspect records for the roster, in file order.
    pub fn to_suspects(&self) -> Vec<Suspect> {
        self.suspects.iter().map(SuspectSpec::to_suspect).collect()
    }
}
