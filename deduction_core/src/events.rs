//! Case events - what the narrative layer reports back after play.

use case_rules::{FactSpec, RelationType};
use serde::{Deserialize, Serialize};

use crate::knowledge_base::Fact;

/// Outcomes of interrogations and scene searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseEvent {
    /// A suspect stated where they were.
    AlibiGiven { suspect: String, location: String },

    /// Evidence shows a suspect was not where they claimed.
    AlibiRefuted { suspect: String, location: String },

    /// A suspect admitted to, or was caught with, a motive.
    MotiveRevealed { suspect: String, motive: String },

    /// A suspect described how they knew the victim. Noted on the record only.
    RelationshipNoted { suspect: String, note: String },

    /// Something was found at the scene; it may implicate a suspect.
    ClueDiscovered {
        description: String,
        fact: Option<FactSpec>,
    },
}

impl CaseEvent {
    /// The suspect this event concerns, if any.
    pub fn suspect(&self) -> Option<&str> {
        match self {
            CaseEvent::AlibiGiven { suspect, .. }
            | CaseEvent::AlibiRefuted { suspect, .. }
            | CaseEvent::MotiveRevealed { suspect, .. }
            | CaseEvent::RelationshipNoted { suspect, .. } => Some(suspect),
            CaseEvent::ClueDiscovered { fact, .. } => fact.as_ref().map(|f| f.subject.as_str()),
        }
    }

    /// Facts this event establishes.
    pub fn to_facts(&self) -> Vec<Fact> {
        match self {
            CaseEvent::AlibiGiven { suspect, location } => {
                vec![Fact::new(RelationType::Alibi, suspect.clone(), location.clone())]
            }
            CaseEvent::AlibiRefuted { suspect, location } => {
                vec![Fact::new(RelationType::Alibi, suspect.clone(), location.clone()).with_negated(true)]
            }
            CaseEvent::MotiveRevealed { suspect, motive } => {
                vec![Fact::new(RelationType::Motive, suspect.clone(), motive.clone())]
            }
            CaseEvent::RelationshipNoted { .. } => Vec::new(),
            CaseEvent::ClueDiscovered { fact, .. } => fact.iter().map(Fact::from).collect(),
        }
    }

    /// Short note for the suspect's record.
    pub fn describe(&self) -> String {
        match self {
            CaseEvent::AlibiGiven { location, .. } => format!("Alibi given: {}", location),
            CaseEvent::AlibiRefuted { location, .. } => format!("Alibi refuted: {}", location),
            CaseEvent::MotiveRevealed { motive, .. } => format!("Motive revealed: {}", motive),
            CaseEvent::RelationshipNoted { note, .. } => format!("Relationship insight: {}", note),
            CaseEvent::ClueDiscovered { description, .. } => format!("Found {}", description),
        }
    }
}
