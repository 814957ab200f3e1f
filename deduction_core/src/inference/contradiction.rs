//! Contradiction detection - conflicting claims make a subject suspicious.

use case_rules::RelationType;
use tracing::debug;

use super::{Cause, Derivation};
use crate::knowledge_base::{Fact, FactStore};

/// Find every subject holding both polarities of the same `relation` fact.
///
/// Returns `(subject, conflicting fact)` pairs in subject order; the
/// non-negated side of each pair is reported.
pub fn find_contradictions(facts: &FactStore, relation: RelationType) -> Vec<(String, Fact)> {
    let mut found = Vec::new();

    for subject in facts.subjects() {
        let claims: Vec<&Fact> = facts.facts_about(&subject, relation).collect();
        for (i, first) in claims.iter().enumerate() {
            for second in &claims[i + 1..] {
                if first.contradicts(second) {
                    let positive = if first.negated { *second } else { *first };
                    found.push((subject.clone(), positive.clone()));
                }
            }
        }
    }

    found
}

/// One contradiction-detection pass. Returns the number of facts added.
pub fn detect_contradictions(
    facts: &mut FactStore,
    relation: RelationType,
    derived: &mut Vec<Derivation>,
) -> usize {
    let mut added = 0;

    for (subject, conflict) in find_contradictions(facts, relation) {
        let conclusion = Fact::suspicious(subject);
        if facts.insert(conclusion.clone()) {
            debug!(fact = %conclusion, conflict = %conflict, "contradiction detected");
            derived.push(Derivation {
                fact: conclusion,
                cause: Cause::Contradiction(conflict.object),
            });
            added += 1;
        }
    }

    added
}
