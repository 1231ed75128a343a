//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Integration tests for the cognitive pipeline
//!
//! These tests drive a full mind through whole ticks and check:
//! - The documented end-to-end decisions
//! - That a failing grammar leaves every layer untouched
//! - That long runs keep traits, mood and norms within their bounds

use kamasona_agent::mind::{
    DecisionConfig, Mind, MindConfig, MindError, PersonalityTraits, Trait, MOOD_MAX, MOOD_MIN,
};
use kamasona_common::{Action, Grammar, GrammarError, ObjectState, Perception, TokiPonaGrammar};
use mockall::mock;
use proptest::prelude::*;

mock! {
    pub Lexicon {}

    impl Grammar for Lexicon {
        fn canonicalise(&self, tokens: &[String]) -> Result<Vec<String>, GrammarError>;
        fn validate(&self, tokens: &[String]) -> bool;
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Sunny scene with nothing in it
fn bright_empty_scene() -> Perception {
    Perception::new((400.0, 0.0), 1.0)
}

#[test]
fn test_neutral_agent_moves_toward_sunlight() {
    let mut mind = Mind::with_traits(PersonalityTraits::uniform(0.5));

    let weights = mind
        .decision_engine()
        .weights(mind.traits(), mind.mood());
    assert!(weights[0] > weights[1] && weights[0] > weights[2]);

    let decision = mind.decide_with_draw(&bright_empty_scene(), 0.0).unwrap();

    assert_eq!(decision.action, Action::new(["tawa"]));
    assert_eq!(decision.utterance.tokens(), ["mi", "tawa"]);
    assert_eq!(decision.reward, 1.0);
    assert_eq!(mind.mood(), 1.0);
    assert_eq!(mind.norms().get("tawa"), Some(&1.0));
    assert_eq!(mind.tick(), 1);

    // Empty scene is dull, the reward was good and mood is high
    let traits = mind.traits();
    assert_close(traits.get(Trait::Openness), 0.494);
    assert_close(traits.get(Trait::Conscientiousness), 0.506);
    assert_close(traits.get(Trait::Extraversion), 0.516);
    assert_close(traits.get(Trait::Agreeableness), 0.505);
    assert_close(traits.get(Trait::Neuroticism), 0.497);

    // Baseline is untouched by development
    assert_eq!(mind.baseline().traits(), &PersonalityTraits::uniform(0.5));
}

#[test]
fn test_empty_action_is_penalised() {
    let config = MindConfig {
        decision: DecisionConfig {
            candidates: Vec::new(),
            ..DecisionConfig::default()
        },
        ..MindConfig::default()
    };
    let mut mind = Mind::new(TokiPonaGrammar::new(), PersonalityTraits::uniform(0.5), config).with_mood(0.3);

    let decision = mind.decide_with_draw(&bright_empty_scene(), 0.5).unwrap();

    assert!(decision.action.is_empty());
    assert_eq!(decision.utterance.tokens(), ["mi", "lon"]);
    assert_eq!(decision.reward, -0.1);
    assert_close(mind.mood(), 0.2);
    assert!(mind.norms().is_empty());
    assert_eq!(mind.memory().len(), 1);
}

#[test]
fn test_grammar_failure_changes_nothing() {
    let mut grammar = MockLexicon::new();
    grammar.expect_canonicalise().times(1).returning(|tokens| {
        Err(GrammarError::Rejected {
            tokens: tokens.to_vec(),
            reason: "no lexicon".to_string(),
        })
    });

    let traits = PersonalityTraits::new(0.2, 0.4, 0.6, 0.8, 0.3);
    let mut mind = Mind::new(grammar, traits, MindConfig::default()).with_mood(-0.4);

    let result = mind.decide_with_draw(&bright_empty_scene(), 0.0);

    assert!(matches!(
        result,
        Err(MindError::Grammar(GrammarError::Rejected { .. }))
    ));
    assert_eq!(mind.tick(), 0);
    assert_eq!(mind.mood(), -0.4);
    assert_eq!(mind.traits(), &traits);
    assert!(mind.norms().is_empty());
    assert!(mind.memory().is_empty());
}

#[test]
fn test_grammar_sees_subject_and_verb() {
    let mut grammar = MockLexicon::new();
    grammar
        .expect_canonicalise()
        .withf(|tokens: &[String]| tokens == ["mi", "tawa"])
        .times(1)
        .returning(|tokens| Ok(tokens.to_vec()));

    let mut mind = Mind::new(grammar, PersonalityTraits::uniform(0.5), MindConfig::default());
    let decision = mind.decide_with_draw(&bright_empty_scene(), 0.0).unwrap();
    assert_eq!(decision.utterance.tokens(), ["mi", "tawa"]);
}

#[test]
fn test_repeated_reward_reinforces_norm() {
    let mut mind = Mind::with_traits(PersonalityTraits::uniform(0.5));
    let scene = Perception::new((400.0, 0.0), 0.25);
    for _ in 0..4 {
        mind.decide_with_draw(&scene, 0.0).unwrap();
    }
    assert_eq!(mind.norms().get("tawa"), Some(&1.0));
    assert_eq!(mind.memory().len(), 4);

    let rewards: Vec<f64> = mind.memory().experiences().iter().map(|e| e.reward).collect();
    assert_eq!(rewards, vec![0.25; 4]);
}

#[test]
fn test_sustained_punishment_raises_neuroticism() {
    let baseline = PersonalityTraits::uniform(0.5);
    let mut mind = Mind::with_traits(baseline).with_outcome_evaluator(|_: &Perception, _: &Action| -1.0);

    // Crowded scene keeps openness near centre with the default threshold
    let crowded = Perception::new((0.0, 0.0), 0.0)
        .with_object(ObjectState::new((1.0, 0.0), false))
        .with_object(ObjectState::new((2.0, 0.0), false));
    for _ in 0..50 {
        mind.decide_with_draw(&crowded, 0.99).unwrap();
    }
    assert!(mind.traits().neuroticism() > baseline.neuroticism());
    assert_eq!(mind.mood(), MOOD_MIN);
}

proptest! {
    #[test]
    fn prop_long_runs_stay_bounded(
        draws in prop::collection::vec(0.0f64..1.0, 1..200),
        sunlight in 0.0f64..=1.0,
        objects in 0usize..10,
    ) {
        let mut mind = Mind::with_traits(PersonalityTraits::uniform(0.5));
        let scene = (0..objects).fold(Perception::new((0.0, 0.0), sunlight), |p, i| {
            p.with_object(ObjectState::new((i as f64, 0.0), i % 2 == 0))
        });

        for draw in &draws {
            mind.decide_with_draw(&scene, *draw).unwrap();
        }

        prop_assert_eq!(mind.tick(), draws.len() as u64);
        prop_assert!(mind.mood() >= MOOD_MIN && mind.mood() <= MOOD_MAX);
        for (_, value) in mind.traits().iter() {
            prop_assert!((0.0..=1.0).contains(&value));
        }
        for weight in mind.norms().values() {
            prop_assert!(*weight > 0.0);
        }
    }
}
