//! Rule Set - implication rules applied per subject.
//!
//! A rule reads "if every condition holds for X, then the consequent holds for
//! X", where X is the rule's single placeholder. Matching is purely positive:
//! conditions are satisfied only by non-negated facts.

use case_rules::{FactValue, Pattern, RuleSpec, Term};
use serde::{Deserialize, Serialize};

use crate::knowledge_base::Fact;

/// Bind the placeholder of `pattern` to `subject`, yielding a ground fact.
///
/// A placeholder in object position binds to the subject's name as text.
pub fn instantiate(pattern: &Pattern, subject: &str) -> Fact {
    let bound_subject = match &pattern.subject {
        Term::Placeholder => subject.to_string(),
        Term::Literal(name) => name.clone(),
    };
    let bound_object = match &pattern.object {
        Term::Placeholder => FactValue::text(subject),
        Term::Literal(value) => value.clone(),
    };
    Fact::new(pattern.relation, bound_subject, bound_object)
}

/// A named implication rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub conditions: Vec<Pattern>,
    pub consequent: Pattern,
}

impl Rule {
    /// Create a rule. An empty `conditions` list holds for every subject.
    pub fn new(name: impl Into<String>, conditions: Vec<Pattern>, consequent: Pattern) -> Self {
        Self {
            name: name.into(),
            conditions,
            consequent,
        }
    }

    /// Ground conditions for `subject`. Empty for an unconditional rule.
    pub fn conditions_for<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = Fact> + 'a {
        self.conditions.iter().map(move |c| instantiate(c, subject))
    }

    /// Ground consequent for `subject`.
    pub fn consequent_for(&self, subject: &str) -> Fact {
        instantiate(&self.consequent, subject)
    }
}

impl From<&RuleSpec> for Rule {
    fn from(spec: &RuleSpec) -> Self {
        Rule::new(spec.name.clone(), spec.when.clone(), spec.then.clone())
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let conditions: Vec<_> = self.conditions.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{}: if [{}] then {}",
            self.name,
            conditions.join(", "),
            self.consequent
        )
    }
}

/// The fixed collection of rules for a session, built once during setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Register an unnamed rule. It gets the first free `rule-N` name,
    /// starting from its position.
    pub fn add(&mut self, conditions: Vec<Pattern>, consequent: Pattern) {
        let mut n = self.rules.len() + 1;
        while self.get(&format!("rule-{}", n)).is_some() {
            n += 1;
        }
        self.add_rule(Rule::new(format!("rule-{}", n), conditions, consequent));
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> FromIterator<&'a RuleSpec> for RuleSet {
    fn from_iter<I: IntoIterator<Item = &'a RuleSpec>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Rule::from).collect(),
        }
    }
}
