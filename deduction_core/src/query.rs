//! Query Interface - read-only projections of the fact store for the narrative layer.

use case_rules::{FactValue, RelationType, Suspect};
use serde::{Deserialize, Serialize};

use crate::knowledge_base::{Fact, FactStore};

/// What the investigation has established about one suspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub subject: String,
    /// The alibi the suspect stated is on record.
    pub alibi_known: bool,
    pub motive_known: bool,
    pub suspicious: bool,
}

/// A view over a fact store. Every call reads the store as it is now.
#[derive(Debug, Clone, Copy)]
pub struct FactQuery<'a> {
    facts: &'a FactStore,
}

impl<'a> FactQuery<'a> {
    pub fn new(facts: &'a FactStore) -> Self {
        Self { facts }
    }

    /// Subjects with a non-negated `suspicious(S, true)` fact, sorted by name.
    pub fn suspicious_subjects(&self) -> Vec<&'a str> {
        self.facts
            .find_facts(|f| {
                f.relation == RelationType::Suspicious
                    && f.object == FactValue::Bool(true)
                    && !f.negated
            })
            .into_iter()
            .map(|f| f.subject.as_str())
            .collect()
    }

    /// Whether `suspicious(subject, true)` holds.
    pub fn is_suspicious(&self, subject: &str) -> bool {
        self.facts.contains(&Fact::suspicious(subject))
    }

    /// Whether any non-negated fact of `relation` is known about `subject`.
    pub fn has_relation(&self, subject: &str, relation: RelationType) -> bool {
        self.facts.facts_about(subject, relation).any(|f| !f.negated)
    }

    /// Non-negated facts of `relation` about `subject`.
    pub fn known(&self, subject: &str, relation: RelationType) -> Vec<&'a Fact> {
        self.facts
            .facts_about(subject, relation)
            .filter(|f| !f.negated)
            .collect()
    }

    /// Every fact rendered for display, in stable order.
    pub fn facts_for_display(&self) -> Vec<String> {
        self.facts.all_facts().map(|f| f.to_string()).collect()
    }

    /// Progress for each suspect, in the order given.
    ///
    /// An alibi counts as known only when the one the suspect stated is on
    /// record. Alibi facts from other sources do not.
    pub fn progress(&self, suspects: &[Suspect]) -> Vec<Progress> {
        suspects
            .iter()
            .map(|suspect| {
                let name = suspect.name.as_str();
                let alibi_known = suspect.alibi.as_deref().map_or(false, |stated| {
                    self.facts.has_fact(RelationType::Alibi, name, stated, false)
                });

                Progress {
                    subject: suspect.name.clone(),
                    alibi_known,
                    motive_known: self.has_relation(name, RelationType::Motive),
                    suspicious: self.is_suspicious(name),
                }
            })
            .collect()
    }
}
