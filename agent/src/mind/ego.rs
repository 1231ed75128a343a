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

//! Decision engine: personality- and mood-biased action selection
//!
//! Each candidate starts at a base weight and receives an additive bias according
//! to its role:
//!
//! | Role    | Bias                                                        |
//! |---------|-------------------------------------------------------------|
//! | `Move`  | `+ move_weight * (extraversion + max(mood, 0))`             |
//! | `Idle`  | `+ idle_weight * (conscientiousness + agreeableness)` when mood < 0 |
//! | `Other` | `+ openness_weight * openness - neuroticism_weight * neuroticism` |
//!
//! Weights are clamped at zero and normalized, then one action is drawn with a
//! single uniform sample scanned against the cumulative weights.

use crate::mind::personality::PersonalityTraits;
use crate::mind::subconscious::LatentState;
use crate::mind::superego::Norms;
use kamasona_common::{Action, Grammar, GrammarError, Utterance};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The part an action candidate plays in biasing selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateRole {
    /// Movement, favoured by extraversion and good mood
    Move,
    /// Staying put, favoured by conscientiousness and agreeableness in a bad mood
    Idle,
    /// Anything else, favoured by openness and discouraged by neuroticism
    Other,
}

/// An action the engine may choose, tagged with its role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCandidate {
    pub role: CandidateRole,
    pub action: Action,
}

impl ActionCandidate {
    pub fn new(role: CandidateRole, action: Action) -> Self {
        Self { role, action }
    }
}

/// Tunable constants for action selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    pub base_weight: f64,
    pub move_weight: f64,
    pub openness_weight: f64,
    pub idle_weight: f64,
    pub neuroticism_weight: f64,
    /// Subject of every utterance
    pub subject: String,
    /// Verb spoken when no action could be chosen
    pub fallback_verb: String,
    pub candidates: Vec<ActionCandidate>,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            base_weight: 1.0,
            move_weight: 2.0,
            openness_weight: 1.5,
            idle_weight: 2.0,
            neuroticism_weight: 1.0,
            subject: "mi".to_string(),
            fallback_verb: "lon".to_string(),
            candidates: vec![
                ActionCandidate::new(CandidateRole::Move, Action::new(["tawa"])),
                ActionCandidate::new(CandidateRole::Idle, Action::new(["lon"])),
                ActionCandidate::new(CandidateRole::Other, Action::new(["moku"])),
            ],
        }
    }
}

/// Pick an index from normalized `weights` with a single uniform `draw` in [0, 1).
///
/// Returns the first positive-weight index whose running cumulative weight reaches
/// the draw. Zero-weight entries are never returned. If rounding leaves the total
/// short of the draw, the last positive-weight index wins. Returns `None` only when
/// no weight is positive.
pub fn sample_index(weights: &[f64], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (idx, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last_positive = Some(idx);
        if cumulative >= draw {
            return Some(idx);
        }
    }
    last_positive
}

/// Chooses the agent's action for a tick and phrases it as an utterance
#[derive(Debug, Clone)]
pub struct DecisionEngine<G> {
    grammar: G,
    config: DecisionConfig,
}

impl<G: Grammar> DecisionEngine<G> {
    pub fn new(grammar: G, config: DecisionConfig) -> Self {
        Self { grammar, config }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn candidates(&self) -> &[ActionCandidate] {
        &self.config.candidates
    }

    /// Unnormalized weight of a candidate with the given role, never negative
    pub fn role_weight(&self, role: CandidateRole, traits: &PersonalityTraits, mood: f64) -> f64 {
        let c = &self.config;
        let bias = match role {
            CandidateRole::Move => c.move_weight * (traits.extraversion() + mood.max(0.0)),
            CandidateRole::Idle if mood < 0.0 => {
                c.idle_weight * (traits.conscientiousness() + traits.agreeableness())
            }
            CandidateRole::Idle => 0.0,
            CandidateRole::Other => {
                c.openness_weight * traits.openness() - c.neuroticism_weight * traits.neuroticism()
            }
        };
        (c.base_weight + bias).max(0.0)
    }

    /// Selection probability of every candidate, in candidate order
    pub fn weights(&self, traits: &PersonalityTraits, mood: f64) -> Vec<f64> {
        let raw: Vec<f64> = self
            .config
            .candidates
            .iter()
            .map(|candidate| self.role_weight(candidate.role, traits, mood))
            .collect();

        let total: f64 = raw.iter().sum();
        if total > 0.0 && total.is_finite() {
            raw.into_iter().map(|weight| weight / total).collect()
        } else {
            let uniform = 1.0 / raw.len().max(1) as f64;
            vec![uniform; raw.len()]
        }
    }

    /// Choose an action using an explicit uniform draw in [0, 1).
    ///
    /// With no candidates the empty action is returned.
    pub fn choose_with_draw(&self, traits: &PersonalityTraits, mood: f64, draw: f64) -> Action {
        let weights = self.weights(traits, mood);
        tracing::trace!(?weights, draw, "Candidate weights");
        sample_index(&weights, draw)
            .map(|idx| self.config.candidates[idx].action.clone())
            .unwrap_or_default()
    }

    /// Choose an action, drawing once from `rng`
    pub fn choose<R: Rng>(&self, traits: &PersonalityTraits, mood: f64, rng: &mut R) -> Action {
        let draw: f64 = rng.random();
        self.choose_with_draw(traits, mood, draw)
    }

    /// Phrase `action` as a canonical `subject verb` sentence
    pub fn utterance(&self, action: &Action) -> Result<Utterance, GrammarError> {
        let verb = action.verb().unwrap_or(self.config.fallback_verb.as_str());
        let tokens = [self.config.subject.clone(), verb.to_string()];
        Ok(Utterance::new(self.grammar.canonicalise(&tokens)?))
    }

    /// Choose an action and derive the utterance from that same action.
    ///
    /// `norms` are accepted so normative weighting can be added without changing
    /// the pipeline; selection does not consult them yet.
    pub fn generate(
        &self,
        _latent: &LatentState,
        _norms: &Norms,
        traits: &PersonalityTraits,
        mood: f64,
        draw: f64,
    ) -> Result<(Utterance, Action), GrammarError> {
        let action = self.choose_with_draw(traits, mood, draw);
        let utterance = self.utterance(&action)?;
        Ok((utterance, action))
    }
}
