//! Inference Engine - forward chaining to a fixed point.
//!
//! Each pass runs two steps over the current fact store:
//! 1. **Rule application**: for every rule and every known subject, bind the
//!    placeholder to the subject; if every condition is present as a
//!    non-negated fact, assert the consequent
//! 2. **Contradiction detection**: a subject holding a fact of the configured
//!    relation together with its negation is asserted suspicious
//!
//! Passes repeat until one adds nothing. Facts are only added and the space of
//! candidate facts is finite, so the loop always terminates.

mod contradiction;

pub use contradiction::*;

use case_rules::{FactValue, InferenceSettings, RelationType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::knowledge_base::{Fact, FactStore};
use crate::rules::RuleSet;

/// Configuration for the inference engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Run the contradiction pass after rule application.
    pub detect_contradictions: bool,

    /// Relation whose conflicting polarities mark a subject suspicious.
    pub contradiction_relation: RelationType,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            detect_contradictions: true,
            contradiction_relation: RelationType::Alibi,
        }
    }
}

impl From<&InferenceSettings> for InferenceConfig {
    fn from(settings: &InferenceSettings) -> Self {
        Self {
            detect_contradictions: settings.detect_contradictions,
            contradiction_relation: settings.contradiction_relation,
        }
    }
}

/// Why a fact was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// A rule fired for the fact's subject.
    Rule(String),
    /// The subject both claimed and was refuted on this object.
    Contradiction(FactValue),
}

/// A fact added by the engine together with its cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    pub fact: Fact,
    pub cause: Cause,
}

/// Outcome of one `forward_chain` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainReport {
    /// Passes run, including the final pass that added nothing.
    pub passes: usize,

    /// Derived facts in derivation order.
    pub derived: Vec<Derivation>,
}

impl ChainReport {
    /// Number of facts added.
    pub fn added(&self) -> usize {
        self.derived.len()
    }

    pub fn is_fixed_point(&self) -> bool {
        self.derived.is_empty()
    }
}

/// The forward-chaining engine. Holds only configuration; the fact store and
/// rules are passed in on every call.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    config: InferenceConfig,
}

impl InferenceEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(InferenceConfig::default())
    }

    /// Derive facts until a pass adds nothing.
    pub fn forward_chain(&self, facts: &mut FactStore, rules: &RuleSet) -> ChainReport {
        let mut report = ChainReport::default();

        loop {
            report.passes += 1;
            let before = report.derived.len();

            self.apply_rules(facts, rules, &mut report.derived);
            if self.config.detect_contradictions {
                detect_contradictions(facts, self.config.contradiction_relation, &mut report.derived);
            }

            if report.derived.len() == before {
                break;
            }
        }

        info!(
            passes = report.passes,
            added = report.added(),
            total = facts.len(),
            "fixed point reached"
        );
        report
    }

    /// One rule-application pass. Returns the number of facts added.
    pub fn apply_rules(
        &self,
        facts: &mut FactStore,
        rules: &RuleSet,
        derived: &mut Vec<Derivation>,
    ) -> usize {
        let subjects = facts.subjects();
        let mut added = 0;

        for rule in rules.iter() {
            for subject in &subjects {
                let matched = rule
                    .conditions_for(subject)
                    .all(|condition| facts.contains(&condition));
                if !matched {
                    continue;
                }

                let conclusion = rule.consequent_for(subject);
                if facts.insert(conclusion.clone()) {
                    debug!(rule = %rule.name, fact = %conclusion, "rule fired");
                    derived.push(Derivation {
                        fact: conclusion,
                        cause: Cause::Rule(rule.name.clone()),
                    });
                    added += 1;
                }
            }
        }

        added
    }
}
