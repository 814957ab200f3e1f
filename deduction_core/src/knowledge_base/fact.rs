//! Fact definitions - entries in the fact store.

use case_rules::{FactSpec, FactValue, RelationType};
use serde::{Deserialize, Serialize};

/// A typed triple with a polarity.
///
/// Field order drives the derived ordering, which the store relies on to keep
/// facts of one `(subject, relation)` group sorted by object, then polarity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub relation: RelationType,
    pub subject: String,
    pub object: FactValue,
    pub negated: bool,
}

impl Fact {
    /// Create a new, non-negated fact.
    pub fn new(relation: RelationType, subject: impl Into<String>, object: impl Into<FactValue>) -> Self {
        Self {
            relation,
            subject: subject.into(),
            object: object.into(),
            negated: false,
        }
    }

    /// The fact that `subject` is suspicious.
    pub fn suspicious(subject: impl Into<String>) -> Self {
        Self::new(RelationType::Suspicious, subject, true)
    }

    /// Set the polarity.
    pub fn with_negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// The same triple with the opposite polarity.
    pub fn negation(&self) -> Self {
        self.clone().with_negated(!self.negated)
    }

    /// Whether both facts state the same triple with opposite polarity.
    pub fn contradicts(&self, other: &Fact) -> bool {
        self.relation == other.relation
            && self.subject == other.subject
            && self.object == other.object
            && self.negated != other.negated
    }
}

impl From<FactSpec> for Fact {
    fn from(spec: FactSpec) -> Self {
        Fact::new(spec.relation, spec.subject, spec.object).with_negated(spec.negated)
    }
}

impl From<&FactSpec> for Fact {
    fn from(spec: &FactSpec) -> Self {
        Fact::from(spec.clone())
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            f.write_str("NOT ")?;
        }
        write!(f, "{}({}, {})", self.relation, self.subject, self.object)
    }
}
