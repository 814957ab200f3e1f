//! Session - one investigation, owning its facts, rules and suspects.

use case_rules::{CaseConfig, FactValue, RelationType, RevealPolicy, RoomSpec, Suspect};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::events::CaseEvent;
use crate::inference::{ChainReport, InferenceConfig, InferenceEngine};
use crate::knowledge_base::{Fact, FactStore};
use crate::query::{FactQuery, Progress};
use crate::rules::RuleSet;

/// Result of the final reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The culprit was identified.
    Solved { culprit: String },
    /// Somebody else was accused.
    Wrong { accused: String },
    /// Several suspects look guilty and the policy needs exactly one.
    Ambiguous { suspects: Vec<String> },
    /// Nobody looks guilty yet.
    Inconclusive,
}

/// A single investigation. Sessions share nothing with each other.
#[derive(Debug, Clone)]
pub struct Session {
    title: String,
    culprit: String,
    policy: RevealPolicy,
    facts: FactStore,
    rules: RuleSet,
    engine: InferenceEngine,
    suspects: Vec<Suspect>,
    rooms: Vec<RoomSpec>,
}

impl Session {
    /// Build a session from a case description.
    pub fn from_config(config: CaseConfig) -> SessionResult<Self> {
        config.validate()?;

        let rules: RuleSet = config.rules.iter().collect();
        let mut facts = FactStore::new();
        facts.extend(config.facts.iter().map(Fact::from));

        info!(
            title = %config.title,
            suspects = config.suspects.len(),
            rules = rules.len(),
            "case opened"
        );

        Ok(Self {
            suspects: config.to_suspects(),
            engine: InferenceEngine::new(InferenceConfig::from(&config.inference)),
            title: config.title,
            culprit: config.culprit,
            policy: config.reveal_policy,
            facts,
            rules,
            rooms: config.rooms,
        })
    }

    /// Session for the case shipped with `case_rules`.
    pub fn builtin() -> SessionResult<Self> {
        Self::from_config(CaseConfig::builtin()?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Everything known so far, given or derived.
    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    /// The case's rules, fixed at setup.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn suspects(&self) -> &[Suspect] {
        &self.suspects
    }

    pub fn suspect(&self, name: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.name == name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.name.as_str())
    }

    /// Add a fact directly. Returns `false` if it was already known.
    pub fn add_fact(
        &mut self,
        relation: RelationType,
        subject: impl Into<String>,
        object: impl Into<FactValue>,
        negated: bool,
    ) -> bool {
        self.facts.add_fact(relation, subject, object, negated)
    }

    pub fn has_fact(
        &self,
        relation: RelationType,
        subject: &str,
        object: impl Into<FactValue>,
        negated: bool,
    ) -> bool {
        self.facts.has_fact(relation, subject, object, negated)
    }

    /// Apply an event: note it on the suspect's record and add its facts.
    ///
    /// Returns the number of new facts.
    pub fn record(&mut self, event: &CaseEvent) -> SessionResult<usize> {
        if let Some(name) = event.suspect() {
            let suspect = self
                .suspects
                .iter_mut()
                .find(|s| s.name == name)
                .ok_or_else(|| SessionError::UnknownSuspect(name.to_string()))?;

            suspect.note_clue(event.describe());
            if let CaseEvent::AlibiGiven { location, .. } = event {
                suspect.alibi = Some(location.clone());
            }
        }

        let mut added = 0;
        for fact in event.to_facts() {
            if self.facts.insert(fact) {
                added += 1;
            }
        }

        debug!(event = %event.describe(), added, "event recorded");
        Ok(added)
    }

    /// Search `room` at `spot`. The clue found is recorded and returned.
    ///
    /// Returns `None` for an unknown or empty room.
    pub fn search(&mut self, room: &str, spot: usize) -> SessionResult<Option<CaseEvent>> {
        let clue = match self
            .rooms
            .iter()
            .find(|r| r.is_named(room))
            .filter(|r| !r.clues.is_empty())
        {
            Some(r) => r.clues[spot % r.clues.len()].clone(),
            None => return Ok(None),
        };

        let event = CaseEvent::ClueDiscovered {
            description: clue.description,
            fact: clue.fact,
        };
        self.record(&event)?;
        Ok(Some(event))
    }

    /// Run the inference engine to a fixed point.
    pub fn deduce(&mut self) -> ChainReport {
        self.engine.forward_chain(&mut self.facts, &self.rules)
    }

    /// Read-only view over the current facts.
    pub fn query(&self) -> FactQuery<'_> {
        FactQuery::new(&self.facts)
    }

    /// Progress for every suspect, in roster order.
    pub fn progress(&self) -> Vec<Progress> {
        self.query().progress(&self.suspects)
    }

    /// Deduce, then name the culprit according to the case's reveal policy.
    pub fn reveal(&mut self) -> Verdict {
        self.deduce();
        let accused: Vec<String> = self
            .query()
            .suspicious_subjects()
            .into_iter()
            .map(str::to_string)
            .collect();

        let verdict = judge(&accused, &self.culprit, self.policy);
        info!(?verdict, "culprit revealed");
        verdict
    }
}

/// Decide the verdict from the sorted list of suspicious subjects.
fn judge(accused: &[String], culprit: &str, policy: RevealPolicy) -> Verdict {
    if accused.is_empty() {
        return Verdict::Inconclusive;
    }

    match policy {
        RevealPolicy::FirstFound => match accused.iter().find(|name| *name != culprit) {
            Some(wrong) => Verdict::Wrong {
                accused: wrong.clone(),
            },
            None => Verdict::Solved {
                culprit: culprit.to_string(),
            },
        },
        RevealPolicy::RequireUnique => match accused {
            [only] if only == culprit => Verdict::Solved {
                culprit: culprit.to_string(),
            },
            [only] => Verdict::Wrong {
                accused: only.clone(),
            },
            _ => Verdict::Ambiguous {
                suspects: accused.to_vec(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_session() {
        let session = Session::builtin().unwrap();

        assert_eq!(session.title(), "Murder at the Manor");
        assert_eq!(session.suspects().len(), 3);
        assert_eq!(session.rules().len(), 3);
        assert!(session.facts().is_empty());
        assert_eq!(session.rooms().collect::<Vec<_>>(), vec!["bedroom", "kitchen", "study"]);
    }

    #[test]
    fn test_record_updates_suspect_and_facts() {
        let mut session = Session::builtin().unwrap();
        let event = CaseEvent::AlibiGiven {
            suspect: "Bob Bob".to_string(),
            location: "none".to_string(),
        };

        assert_eq!(session.record(&event).unwrap(), 1);
        assert_eq!(session.record(&event).unwrap(), 0);

        let bob = session.suspect("Bob Bob").unwrap();
        assert_eq!(bob.alibi.as_deref(), Some("none"));
        assert_eq!(bob.clues.len(), 2);
        assert!(session.has_fact(RelationType::Alibi, "Bob Bob", "none", false));
    }

    #[test]
    fn test_relationship_answer_adds_no_subject() {
        let mut session = Session::builtin().unwrap();
        let event = CaseEvent::RelationshipNoted {
            suspect: "Bob Bob".to_string(),
            note: "business partner".to_string(),
        };

        assert_eq!(session.record(&event).unwrap(), 0);
        assert_eq!(session.suspect("Bob Bob").unwrap().clues.len(), 1);
        assert!(session.facts().subjects().is_empty());
    }

    #[test]
    fn test_record_unknown_suspect() {
        let mut session = Session::builtin().unwrap();
        let event = CaseEvent::MotiveRevealed {
            suspect: "Eve".to_string(),
            motive: "greed".to_string(),
        };

        let err = session.record(&event).unwrap_err();
        assert!(matches!(err, SessionError::UnknownSuspect(name) if name == "Eve"));
        assert!(session.facts().is_empty());
    }

    #[test]
    fn test_search_records_clue() {
        let mut session = Session::builtin().unwrap();

        let event = session.search("Study", 0).unwrap().unwrap();
        assert!(matches!(event, CaseEvent::ClueDiscovered { ref description, .. } if description == "a hidden letter"));
        assert!(session.has_fact(RelationType::Motive, "Alice Smith", "inheritance", false));
        assert_eq!(session.suspect("Alice Smith").unwrap().clues.len(), 1);

        // Spots wrap around the room's clue table.
        let event = session.search("study", 4).unwrap().unwrap();
        assert!(matches!(event, CaseEvent::ClueDiscovered { fact: None, .. }));

        assert!(session.search("attic", 0).unwrap().is_none());
    }

    #[test]
    fn test_reveal_solved() {
        let mut session = Session::builtin().unwrap();
        session.add_fact(RelationType::Motive, "Alice Smith", "inheritance", false);

        assert_eq!(
            session.reveal(),
            Verdict::Solved {
                culprit: "Alice Smith".to_string()
            }
        );
    }

    #[test]
    fn test_reveal_inconclusive_without_evidence() {
        let mut session = Session::builtin().unwrap();
        session.add_fact(RelationType::Alibi, "Bob Bob", "home", false);

        assert_eq!(session.reveal(), Verdict::Inconclusive);
    }

    #[test]
    fn test_reveal_contradiction_accuses_wrong_suspect() {
        let mut session = Session::builtin().unwrap();
        session
            .record(&CaseEvent::AlibiGiven {
                suspect: "Charlie Doe".to_string(),
                location: "restaurant".to_string(),
            })
            .unwrap();
        session
            .record(&CaseEvent::AlibiRefuted {
                suspect: "Charlie Doe".to_string(),
                location: "restaurant".to_string(),
            })
            .unwrap();

        assert_eq!(
            session.reveal(),
            Verdict::Wrong {
                accused: "Charlie Doe".to_string()
            }
        );
    }

    #[test]
    fn test_progress_in_roster_order() {
        let mut session = Session::builtin().unwrap();
        session.add_fact(RelationType::Motive, "Charlie Doe", "jealousy", false);
        session.deduce();

        let progress = session.progress();
        assert_eq!(progress.len(), 3);
        assert_eq!(progress[0].subject, "Bob Bob");
        assert!(progress[2].motive_known);
        assert!(!progress[2].alibi_known);
        assert!(!progress[2].suspicious);
    }

    #[test]
    fn test_scene_alibi_is_not_a_stated_alibi() {
        let mut session = Session::builtin().unwrap();
        session.search("kitchen", 2).unwrap();

        assert!(session.has_fact(RelationType::Alibi, "Alice Smith", "none", false));
        let alice = session.progress().into_iter().find(|p| p.subject == "Alice Smith").unwrap();
        assert!(!alice.alibi_known);

        session
            .record(&CaseEvent::AlibiGiven {
                suspect: "Alice Smith".to_string(),
                location: "none".to_string(),
            })
            .unwrap();
        let alice = session.progress().into_iter().find(|p| p.subject == "Alice Smith").unwrap();
        assert!(alice.alibi_known);
    }

    #[test]
    fn test_judge_require_unique() {
        let policy = RevealPolicy::RequireUnique;

        assert_eq!(
            judge(&names(&["Alice Smith", "Bob Bob"]), "Alice Smith", policy),
            Verdict::Ambiguous {
                suspects: names(&["Alice Smith", "Bob Bob"])
            }
        );
        assert_eq!(
            judge(&names(&["Bob Bob"]), "Alice Smith", policy),
            Verdict::Wrong {
                accused: "Bob Bob".to_string()
            }
        );
        assert_eq!(judge(&[], "Alice Smith", policy), Verdict::Inconclusive);
    }

    #[test]
    fn test_judge_first_found() {
        let policy = RevealPolicy::FirstFound;

        assert_eq!(
            judge(&names(&["Alice Smith", "Charlie Doe", "Bob Bob"]), "Alice Smith", policy),
            Verdict::Wrong {
                accused: "Charlie Doe".to_string()
            }
        );
        assert_eq!(
            judge(&names(&["Alice Smith"]), "Alice Smith", policy),
            Verdict::Solved {
                culprit: "Alice Smith".to_string()
            }
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::builtin().unwrap();
        let second = Session::builtin().unwrap();

        first.add_fact(RelationType::Motive, "Alice Smith", "inheritance", false);
        first.deduce();

        assert!(first.query().is_suspicious("Alice Smith"));
        assert!(!second.query().is_suspicious("Alice Smith"));
    }
}
