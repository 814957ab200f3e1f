use case_rules::{CaseConfig, FactValue, Pattern, RelationType, RevealPolicy};
use deduction_core::{
    CaseEvent, Cause, FactStore, InferenceEngine, Rule, RuleSet, Session, Verdict,
};

#[test]
fn no_alibi_and_jealousy_is_suspicious() {
    let mut facts = FactStore::new();
    facts.add_fact(RelationType::Alibi, "S", "none", false);
    facts.add_fact(RelationType::Motive, "S", "jealousy", false);
    let rules: RuleSet = CaseConfig::builtin().unwrap().rules.iter().collect();

    let report = InferenceEngine::with_defaults().forward_chain(&mut facts, &rules);

    assert!(facts.has_fact(RelationType::Suspicious, "S", true, false));
    assert_eq!(report.derived[0].cause, Cause::Rule("no-alibi-jealousy".to_string()));
}

#[test]
fn conflicting_alibi_is_suspicious() {
    let mut facts = FactStore::new();
    facts.add_fact(RelationType::Alibi, "S", "home", false);
    facts.add_fact(RelationType::Alibi, "S", "home", true);

    let report = InferenceEngine::with_defaults().forward_chain(&mut facts, &RuleSet::new());

    assert!(facts.has_fact(RelationType::Suspicious, "S", true, false));
    assert_eq!(report.derived[0].cause, Cause::Contradiction(FactValue::text("home")));
}

#[test]
fn vacuous_rule_applies_on_first_pass() {
    let mut facts = FactStore::new();
    facts.add_fact(RelationType::Relationship, "Alice", "neighbor", false);
    facts.add_fact(RelationType::Relationship, "Bob", "coworker", false);
    let rules = RuleSet::new().with_rule(Rule::new(
        "everyone",
        vec![],
        Pattern::about(RelationType::Suspicious, true),
    ));

    let report = InferenceEngine::with_defaults().forward_chain(&mut facts, &rules);

    assert_eq!(report.added(), 2);
    assert_eq!(report.passes, 2);
    assert!(facts.has_fact(RelationType::Suspicious, "Alice", true, false));
    assert!(facts.has_fact(RelationType::Suspicious, "Bob", true, false));
}

#[test]
fn innocent_subject_stays_clear() {
    let mut session = Session::builtin().unwrap();
    session.add_fact(RelationType::Alibi, "Bob Bob", "restaurant", false);
    session.add_fact(RelationType::Motive, "Bob Bob", "jealousy", false);

    for _ in 0..3 {
        session.deduce();
        assert!(!session.query().is_suspicious("Bob Bob"));
    }
}

#[test]
fn full_investigation_solves_the_case() {
    let mut session = Session::builtin().unwrap();

    session
        .record(&CaseEvent::AlibiGiven {
            suspect: "Bob Bob".to_string(),
            location: "home".to_string(),
        })
        .unwrap();
    let clue = session.search("kitchen", 2).unwrap();
    assert!(clue.is_some());
    let clue = session.search("study", 0).unwrap();
    assert!(clue.is_some());

    let report = session.deduce();
    assert_eq!(report.added(), 1);
    assert_eq!(session.query().suspicious_subjects(), vec!["Alice Smith"]);

    assert_eq!(
        session.reveal(),
        Verdict::Solved {
            culprit: "Alice Smith".to_string()
        }
    );
}

#[test]
fn first_found_policy_loses_when_another_suspect_is_flagged() {
    let mut config = CaseConfig::builtin().unwrap();
    config.reveal_policy = RevealPolicy::FirstFound;
    let mut session = Session::from_config(config).unwrap();

    session.add_fact(RelationType::Motive, "Alice Smith", "inheritance", false);
    session.add_fact(RelationType::Alibi, "Bob Bob", "none", false);
    session.add_fact(RelationType::Motive, "Bob Bob", "revenge", false);

    assert_eq!(
        session.reveal(),
        Verdict::Wrong {
            accused: "Bob Bob".to_string()
        }
    );
}

#[test]
fn custom_case_from_toml() {
    let text = r#"
        title = "The Locked Study"
        culprit = "Dora"
        reveal_policy = "first_found"

        [inference]
        detect_contradictions = false

        [[suspects]]
        name = "Dora"

        [[suspects]]
        name = "Ezra"

        [[facts]]
        relation = "alibi"
        subject = "Ezra"
        object = "library"

        [[facts]]
        relation = "alibi"
        subject = "Ezra"
        object = "library"
        negated = true

        [[facts]]
        relation = "motive"
        subject = "Dora"
        object = "debt"

        [[rules]]
        name = "debt"
        when = [{ relation = "motive", subject = "?X", object = "debt" }]
        then = { relation = "suspicious", subject = "?X", object = true }
    "#;
    let mut session = Session::from_config(CaseConfig::from_toml_str(text).unwrap()).unwrap();

    assert_eq!(session.facts().len(), 3);
    assert_eq!(
        session.reveal(),
        Verdict::Solved {
            culprit: "Dora".to_string()
        }
    );
    assert!(!session.query().is_suspicious("Ezra"));
}
