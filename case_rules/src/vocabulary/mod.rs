//! Relation vocabulary shared by the case file and the deduction core.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Token standing for the subject under test in case files.
pub const PLACEHOLDER_TOKEN: &str = "?X";

/// The kinds of relation a fact can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    /// Where the subject claims (or is shown not) to have been.
    Alibi,
    /// A reason the subject might have wanted the victim dead.
    Motive,
    /// How the subject knew the victim.
    Relationship,
    /// Conclusion relation; the object is `true`.
    Suspicious,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Alibi => "alibi",
            RelationType::Motive => "motive",
            RelationType::Relationship => "relationship",
            RelationType::Suspicious => "suspicious",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The object slot of a fact: a domain label or a truth value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Bool(bool),
    Text(String),
}

impl FactValue {
    pub fn text(value: impl Into<String>) -> Self {
        FactValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FactValue::Text(s) => Some(s),
            FactValue::Bool(_) => None,
        }
    }
}

impl From<bool> for FactValue {
    fn from(value: bool) -> Self {
        FactValue::Bool(value)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        FactValue::Text(value.to_string())
    }
}

impl From<String> for FactValue {
    fn from(value: String) -> Self {
        FactValue::Text(value)
    }
}

impl std::fmt::Display for FactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactValue::Bool(b) => write!(f, "{}", b),
            FactValue::Text(s) => f.write_str(s),
        }
    }
}

/// A pattern position: either the rule's placeholder or a fixed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term<T> {
    Placeholder,
    Literal(T),
}

impl<T> Term<T> {
    pub fn literal(value: impl Into<T>) -> Self {
        Term::Literal(value.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Term::Placeholder)
    }
}

impl Serialize for Term<String> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Placeholder => serializer.serialize_str(PLACEHOLDER_TOKEN),
            Term::Literal(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Term<String> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == PLACEHOLDER_TOKEN {
            Term::Placeholder
        } else {
            Term::Literal(raw)
        })
    }
}

impl Serialize for Term<FactValue> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Placeholder => serializer.serialize_str(PLACEHOLDER_TOKEN),
            Term::Literal(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Term<FactValue> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match FactValue::deserialize(deserializer)? {
            FactValue::Text(s) if s == PLACEHOLDER_TOKEN => Term::Placeholder,
            value => Term::Literal(value),
        })
    }
}

/// One triple of a rule, with the subject placeholder still unbound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub relation: RelationType,
    pub subject: Term<String>,
    pub object: Term<FactValue>,
}

impl Pattern {
    pub fn new(relation: RelationType, subject: Term<String>, object: Term<FactValue>) -> Self {
        Self {
            relation,
            subject,
            object,
        }
    }

    /// Pattern about the subject under test: `relation(X, object)`.
    pub fn about(relation: RelationType, object: impl Into<FactValue>) -> Self {
        Self::new(relation, Term::Placeholder, Term::Literal(object.into()))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subject = match &self.subject {
            Term::Placeholder => PLACEHOLDER_TOKEN,
            Term::Literal(s) => s.as_str(),
        };
        match &self.object {
            Term::Placeholder => write!(f, "{}({}, {})", self.relation, subject, PLACEHOLDER_TOKEN),
            Term::Literal(v) => write!(f, "{}({}, {})", self.relation, subject, v),
        }
    }
}
