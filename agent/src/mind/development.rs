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

//! Slow, experience-driven personality development
//!
//! Each tick nudges every trait by a small linear response to what the agent just
//! lived through (novelty of its surroundings, the reward it received, its mood and
//! the verb it acted on), while a restoring force pulls the trait back toward the
//! agent's baseline temperament:
//!
//! ```text
//! next = clamp(current + pace * delta - pace * baseline_pull * (current - baseline), 0, 1)
//! ```
//!
//! With no stimulus this is exponential decay toward the baseline, so sustained
//! one-sided reinforcement settles at a bounded offset instead of running away.

use crate::mind::personality::{PersonalityBaseline, PersonalityTraits, Trait, clamp_unit};
use kamasona_common::{Action, Perception};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Additive trait bias contributed by acting on a particular verb
pub type TraitBias = BTreeMap<Trait, f64>;

/// Tunable constants for personality development
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    /// Drift speed per tick
    pub pace: f64,
    /// Strength of the restoring force toward the baseline
    pub baseline_pull: f64,
    /// Object count at which a scene is fully novel
    pub novelty_threshold: f64,
    pub novelty_weight: f64,
    /// Novelty level that leaves openness unchanged
    pub novelty_center: f64,
    pub conscientiousness_positive: f64,
    pub conscientiousness_negative: f64,
    pub extraversion_positive: f64,
    pub extraversion_negative: f64,
    pub extraversion_mood: f64,
    pub agreeableness_positive: f64,
    pub agreeableness_negative: f64,
    /// Neuroticism gain per unit of negative reward
    pub neuroticism_negative: f64,
    /// Neuroticism relief per unit of positive reward
    pub neuroticism_positive: f64,
    /// Per-verb trait bias table; unknown verbs contribute nothing
    pub action_bias: HashMap<String, TraitBias>,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        let action_bias = HashMap::from([
            ("moku".to_string(), TraitBias::from([(Trait::Openness, 0.2)])),
            ("lon".to_string(), TraitBias::from([(Trait::Conscientiousness, 0.1)])),
            ("tawa".to_string(), TraitBias::from([(Trait::Extraversion, 0.2)])),
        ]);
        Self {
            pace: 0.02,
            baseline_pull: 0.15,
            novelty_threshold: 5.0,
            novelty_weight: 0.6,
            novelty_center: 0.5,
            conscientiousness_positive: 0.3,
            conscientiousness_negative: 0.2,
            extraversion_positive: 0.4,
            extraversion_negative: 0.2,
            extraversion_mood: 0.2,
            agreeableness_positive: 0.25,
            agreeableness_negative: 0.1,
            neuroticism_negative: 0.5,
            neuroticism_positive: 0.15,
            action_bias,
        }
    }
}

/// Evolves personality traits at a human-like pace around a fixed baseline
#[derive(Debug, Clone)]
pub struct PersonalityDevelopment {
    config: DevelopmentConfig,
    baseline: PersonalityBaseline,
}

impl PersonalityDevelopment {
    pub fn new(baseline: PersonalityBaseline, config: DevelopmentConfig) -> Self {
        Self { config, baseline }
    }

    pub fn baseline(&self) -> &PersonalityBaseline {
        &self.baseline
    }

    pub fn config(&self) -> &DevelopmentConfig {
        &self.config
    }

    /// Novelty of a scene in [0, 1], saturating at the configured object count
    pub fn novelty(&self, perception: &Perception) -> f64 {
        let count = perception.object_count() as f64;
        if self.config.novelty_threshold <= 0.0 {
            return if count > 0.0 { 1.0 } else { 0.0 };
        }
        (count / self.config.novelty_threshold).min(1.0)
    }

    /// Bias attached to an action verb, if the table has one
    pub fn bias_for(&self, verb: Option<&str>) -> Option<&TraitBias> {
        verb.and_then(|verb| self.config.action_bias.get(verb))
    }

    /// Raw per-trait stimulus for one tick, before pace and baseline pull
    pub fn deltas(&self, novelty: f64, reward: f64, mood: f64, verb: Option<&str>) -> [(Trait, f64); 5] {
        let c = &self.config;
        let positive = reward.max(0.0);
        let negative = (-reward).max(0.0);
        let bias = |which: Trait| {
            self.bias_for(verb)
                .and_then(|bias| bias.get(&which))
                .copied()
                .unwrap_or(0.0)
        };

        Trait::ALL.map(|which| {
            let delta = match which {
                Trait::Openness => (novelty - c.novelty_center) * c.novelty_weight,
                Trait::Conscientiousness => {
                    c.conscientiousness_positive * positive - c.conscientiousness_negative * negative
                }
                Trait::Extraversion => {
                    c.extraversion_positive * positive - c.extraversion_negative * negative
                        + c.extraversion_mood * mood
                }
                Trait::Agreeableness => {
                    c.agreeableness_positive * positive - c.agreeableness_negative * negative
                }
                Trait::Neuroticism => {
                    c.neuroticism_negative * negative - c.neuroticism_positive * positive
                }
            };
            (which, delta + bias(which))
        })
    }

    /// One discrete step of a single trait toward `current + delta`, pulled toward `baseline`
    pub fn drift(&self, current: f64, baseline: f64, delta: f64) -> f64 {
        let pace = self.config.pace;
        clamp_unit(current + pace * delta - pace * self.config.baseline_pull * (current - baseline))
    }

    /// Evolve `traits` in place from one tick of experience and return them
    pub fn update<'a>(
        &self,
        traits: &'a mut PersonalityTraits,
        perception: &Perception,
        action: &Action,
        reward: f64,
        mood: f64,
    ) -> &'a PersonalityTraits {
        let novelty = self.novelty(perception);
        for (which, delta) in self.deltas(novelty, reward, mood, action.verb()) {
            let next = self.drift(traits.get(which), self.baseline.get(which), delta);
            traits.set(which, next);
        }
        tracing::trace!(?traits, novelty, reward, mood, "Personality developed");
        traits
    }
}
