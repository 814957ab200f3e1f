//! Suspect records kept by the narrative layer.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A person of interest in the case.
///
/// The record holds what the narrative layer shows the player. Reasoning about
/// the suspect happens over facts keyed by `name`, never over this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suspect {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub relationship_to_victim: String,

    /// Last alibi the suspect gave, if questioned about it.
    pub alibi: Option<String>,

    /// Notes gathered during interrogation and scene searches.
    pub clues: Vec<String>,
}

impl Suspect {
    /// Create a new suspect with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            description: String::new(),
            relationship_to_victim: String::new(),
            alibi: None,
            clues: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship_to_victim = relationship.into();
        self
    }

    /// Record a clue note against this suspect.
    pub fn note_clue(&mut self, clue: impl Into<String>) {
        self.clues.push(clue.into());
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Alibi: {}, Relationship: {}",
            self.name,
            self.alibi.as_deref().unwrap_or("undisclosed"),
            self.relationship_to_victim
        )
    }
}
