//! Integration tests: engine behaviour through the public API only.

use std::collections::HashSet;
use topos_kernel::spells::{RANNA, TEXT_KEY};
use topos_kernel::{
    Content, ContentValue, Engine, EngineConfig, Morphism, MorphismMetadata, State,
    SubobjectClassifier, ToposError, TruthAssignment, TruthValue, derive_truth,
};

fn content(pairs: &[(&str, ContentValue)]) -> Content {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn int_step(name: &str, source: &str, target: &str, f: fn(i64) -> i64) -> Morphism {
    Morphism::new(
        name,
        source,
        target,
        MorphismMetadata::default(),
        move |mut content: Content| {
            let n = match content.get("n") {
                Some(ContentValue::Int(n)) => *n,
                _ => 0,
            };
            content.insert("n".into(), ContentValue::Int(f(n)));
            Ok(content)
        },
    )
}

fn set(items: &[i32]) -> HashSet<i32> {
    items.iter().copied().collect()
}

#[test]
fn truth_is_total_and_false_is_nor() {
    let samples = vec![
        Content::new(),
        content(&[("a", ContentValue::from("text"))]),
        content(&[("a", ContentValue::Int(1))]),
        content(&[("a", ContentValue::Float(1.25))]),
        content(&[("timestamp", ContentValue::Float(3.0))]),
        content(&[("a", ContentValue::Undefined), ("b", ContentValue::Bool(true))]),
        content(&[("a", ContentValue::Float(4.0)), ("b", ContentValue::from("x"))]),
    ];

    for sample in &samples {
        let truth = derive_truth(sample);
        assert_eq!(truth.iter().count(), 5);
        let any_evidence = truth.get(TruthValue::Classical)
            || truth.get(TruthValue::Flow)
            || truth.get(TruthValue::Temporal)
            || truth.get(TruthValue::Void);
        assert_eq!(truth.get(TruthValue::False), !any_evidence, "{sample:?}");
    }
}

#[test]
fn empty_content_derives_false_only() {
    assert_eq!(
        derive_truth(&Content::new()),
        TruthAssignment::from_evidence(false, false, false, false)
    );
}

#[test]
fn composition_is_associative_in_effect() {
    let a = int_step("A", "X", "Y", |n| n + 3);
    let b = int_step("B", "Y", "Z", |n| n * 5);
    let c = int_step("C", "Z", "W", |n| n - 7);

    let left = a.compose(&b).unwrap().compose(&c).unwrap();
    let right = a.compose(&b.compose(&c).unwrap()).unwrap();
    assert_eq!(left.name(), right.name());
    assert_eq!(left.source_type(), "X");
    assert_eq!(right.target_type(), "W");

    let start = State::new(content(&[("n", ContentValue::Int(2))]), "test");
    let via_left = left.apply(&start).unwrap();
    let via_right = right.apply(&start).unwrap();
    assert_eq!(via_left.content(), via_right.content());
    assert_eq!(via_left.get("n"), Some(&ContentValue::Int(18)));
}

#[test]
fn mismatched_composition_fails() {
    let a = int_step("A", "X", "Y", |n| n);
    let c = int_step("C", "Z", "W", |n| n);
    match a.compose(&c) {
        Err(ToposError::TypeMismatch { first, second, .. }) => {
            assert_eq!(first, "A");
            assert_eq!(second, "C");
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
}

#[test]
fn classifier_empty_subset_is_all_false() {
    let omega = SubobjectClassifier::new();
    for whole in [set(&[]), set(&[1]), set(&[1, 2, 3])] {
        let truth = omega.classify(&set(&[]), &whole);
        assert!(truth.iter().all(|(_, value)| !value));
    }
}

#[test]
fn classifier_containment_cases() {
    let engine = Engine::boot();

    let truth = engine.classify(&set(&[1, 2]), &set(&[1, 2, 3]));
    assert!(truth.get(TruthValue::Classical));

    let truth = engine.classify(&set(&[1, 2, 3, 4]), &set(&[1, 2]));
    assert!(!truth.get(TruthValue::Flow));
    assert!(!truth.get(TruthValue::Classical));

    let truth = engine.classify(&set(&[1, 2, 3]), &set(&[3, 4, 5]));
    assert!(truth.get(TruthValue::Temporal));
    assert!(!truth.get(TruthValue::Classical));
}

#[test]
fn classify_does_not_touch_engine_state() {
    let engine = Engine::boot();
    let before = engine.state().clone();
    engine.classify(&set(&[1]), &set(&[1]));
    assert_eq!(engine.state(), &before);
}

#[test]
fn unknown_name_fails_without_transition() {
    let mut engine = Engine::boot();
    let before = engine.state().clone();
    assert_eq!(
        engine.apply("NONEXISTENT").unwrap_err(),
        ToposError::UnknownMorphism("NONEXISTENT".into())
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn reduction_keeps_first_half_of_words() {
    let config = EngineConfig::default().with_content(TEXT_KEY, "a b c d");
    let mut engine = Engine::boot_with(&config);
    let state = engine.apply(RANNA).unwrap();
    assert_eq!(state.get(TEXT_KEY), Some(&ContentValue::from("a b")));

    let config = EngineConfig::default().with_content(TEXT_KEY, "a b c d e");
    let mut engine = Engine::boot_with(&config);
    let state = engine.apply(RANNA).unwrap();
    assert_eq!(state.get(TEXT_KEY), Some(&ContentValue::from("a b")));
}

#[test]
fn sequence_keeps_progress_up_to_failure() {
    let mut engine = Engine::boot();
    engine.register(int_step("Known1", "S", "S", |n| n + 1)).unwrap();
    engine.register(int_step("Known2", "S", "S", |n| n * 100)).unwrap();

    let err = engine
        .compose_sequence(["Known1", "Unknown", "Known2"])
        .unwrap_err();
    assert_eq!(err, ToposError::UnknownMorphism("Unknown".into()));
    assert_eq!(engine.state().get("n"), Some(&ContentValue::Int(1)));
}

#[test]
fn sequence_runs_every_name_in_order() {
    let mut engine = Engine::boot();
    engine.register(int_step("Inc", "S", "S", |n| n + 1)).unwrap();
    engine.register(int_step("Double", "S", "S", |n| n * 2)).unwrap();

    let state = engine
        .compose_sequence(vec!["Inc".to_string(), "Double".to_string(), "Inc".to_string()])
        .unwrap();
    assert_eq!(state.get("n"), Some(&ContentValue::Int(3)));
}

#[test]
fn caller_snapshot_survives_later_applications() {
    let config = EngineConfig::default().with_content(TEXT_KEY, "keep this whole sentence");
    let mut engine = Engine::boot_with(&config);

    let before = engine.state().snapshot();
    engine.apply(RANNA).unwrap();
    let after = engine.state().snapshot();
    engine.apply(RANNA).unwrap();

    assert_eq!(before[TEXT_KEY], ContentValue::from("keep this whole sentence"));
    assert_eq!(after[TEXT_KEY], ContentValue::from("keep this"));
    assert_eq!(engine.state().get(TEXT_KEY), Some(&ContentValue::from("keep")));
}

#[test]
fn applying_never_changes_mode() {
    let config = EngineConfig {
        initial_mode: "lucid".to_string(),
        ..EngineConfig::default()
    };
    let mut engine = Engine::boot_with(&config);
    let state = engine.compose_sequence(["BUTTERFLY", "RANNA", "BUTTERFLY"]).unwrap();
    assert_eq!(state.mode(), "lucid");
}
