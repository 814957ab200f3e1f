//! Fact Store - the set of everything known or derived about a case.

use case_rules::{FactValue, RelationType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::Fact;

/// A set of facts with an index by `(subject, relation)`.
///
/// Facts are only ever added. A fact and its negation may both be present.
/// Enumeration is ordered by subject, then relation, then object, then
/// polarity, so every caller sees the same order for the same contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(from = "Vec<Fact>", into = "Vec<Fact>")]
pub struct FactStore {
    /// Membership set.
    facts: HashSet<Fact>,

    /// Index: (subject, relation) -> facts in that group.
    by_subject: BTreeMap<(String, RelationType), BTreeSet<Fact>>,
}

impl FactStore {
    /// Create a new empty fact store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact. Returns `false` if it was already present.
    pub fn insert(&mut self, fact: Fact) -> bool {
        if self.facts.contains(&fact) {
            return false;
        }

        self.by_subject
            .entry((fact.subject.clone(), fact.relation))
            .or_default()
            .insert(fact.clone());
        self.facts.insert(fact)
    }

    /// Insert `relation(subject, object)` with the given polarity.
    pub fn add_fact(
        &mut self,
        relation: RelationType,
        subject: impl Into<String>,
        object: impl Into<FactValue>,
        negated: bool,
    ) -> bool {
        self.insert(Fact::new(relation, subject, object).with_negated(negated))
    }

    /// Check whether exactly this fact, polarity included, is present.
    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// Check whether `relation(subject, object)` is present with the given polarity.
    pub fn has_fact(
        &self,
        relation: RelationType,
        subject: &str,
        object: impl Into<FactValue>,
        negated: bool,
    ) -> bool {
        self.contains(&Fact::new(relation, subject, object).with_negated(negated))
    }

    /// Iterate over all facts in stable order.
    pub fn all_facts(&self) -> impl Iterator<Item = &Fact> + '_ {
        self.by_subject.values().flat_map(|group| group.iter())
    }

    /// Every subject appearing in at least one fact, sorted.
    pub fn subjects(&self) -> BTreeSet<String> {
        self.by_subject
            .keys()
            .map(|(subject, _)| subject.clone())
            .collect()
    }

    /// Facts of one relation about one subject, both polarities.
    pub fn facts_about<'a>(
        &'a self,
        subject: &str,
        relation: RelationType,
    ) -> impl Iterator<Item = &'a Fact> + 'a {
        self.by_subject
            .get(&(subject.to_string(), relation))
            .into_iter()
            .flat_map(|group| group.iter())
    }

    /// Find facts matching a predicate, in stable order.
    pub fn find_facts<F>(&self, predicate: F) -> Vec<&Fact>
    where
        F: Fn(&Fact) -> bool,
    {
        self.all_facts().filter(|f| predicate(f)).collect()
    }

    /// Get the total number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Check whether nothing is known yet.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Extend<Fact> for FactStore {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        for fact in iter {
            self.insert(fact);
        }
    }
}

impl From<Vec<Fact>> for FactStore {
    fn from(facts: Vec<Fact>) -> Self {
        let mut store = FactStore::new();
        store.extend(facts);
        store
    }
}

impl From<FactStore> for Vec<Fact> {
    fn from(store: FactStore) -> Self {
        store.all_facts().cloned().collect()
    }
}
