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

//! The agent's mind
//!
//! A [`Mind`] composes the cognitive layers and runs one full feedback loop per
//! call to [`Mind::decide`]:
//!
//! 1. The subconscious encodes the perception into a latent state
//! 2. The superego exposes its current norms
//! 3. The ego chooses an action and phrases it through the grammar
//! 4. The outcome of the action is scored from the pre-update state
//! 5. Emotion, personality, norms and the experience log all learn from that
//!    same reward and action
//!
//! A tick is all-or-nothing: if the grammar collaborator fails, no state is
//! touched and the error is returned.

mod development;
mod ego;
mod emotion;
mod outcome;
mod personality;
mod subconscious;
mod superego;

pub use self::development::{DevelopmentConfig, PersonalityDevelopment, TraitBias};
pub use self::ego::{ActionCandidate, CandidateRole, DecisionConfig, DecisionEngine, sample_index};
pub use self::emotion::{Emotion, MOOD_MAX, MOOD_MIN};
pub use self::outcome::{OutcomeEvaluator, SunlightReward};
pub use self::personality::{PersonalityBaseline, PersonalityTraits, Trait};
pub use self::subconscious::{AssociativeMemory, Experience, LatentState};
pub use self::superego::{NormativeMemory, Norms};

use kamasona_common::{Action, Grammar, GrammarError, Perception, TokiPonaGrammar, Utterance};
use metrics::{counter, gauge, histogram};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Errors that abort a cognitive tick
#[derive(Debug, Error)]
pub enum MindError {
    /// The grammar collaborator could not phrase the chosen action
    #[error("Grammar failure: {0}")]
    Grammar(#[from] GrammarError),
}

/// Result type for mind operations
pub type MindResult<T> = Result<T, MindError>;

/// Runtime identity of an agent, used to tell agents apart in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(Uuid);

impl AgentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tunable constants for every layer of the mind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindConfig {
    pub development: DevelopmentConfig,
    pub decision: DecisionConfig,
    pub reward: SunlightReward,
}

/// What the mind produced for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub utterance: Utterance,
    pub action: Action,
    pub reward: f64,
}

/// An agent's complete cognitive state
pub struct Mind<G: Grammar = TokiPonaGrammar> {
    id: AgentId,
    tick: u64,
    traits: PersonalityTraits,
    emotion: Emotion,
    development: PersonalityDevelopment,
    superego: NormativeMemory,
    subconscious: AssociativeMemory,
    ego: DecisionEngine<G>,
    outcome: Box<dyn OutcomeEvaluator + Send + Sync>,
    rng: StdRng,
}

impl<G: Grammar> fmt::Debug for Mind<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mind")
            .field("id", &self.id)
            .field("tick", &self.tick)
            .field("traits", &self.traits)
            .field("emotion", &self.emotion)
            .field("norms", &self.superego.len())
            .field("experiences", &self.subconscious.len())
            .finish()
    }
}

impl<G: Grammar> Mind<G> {
    /// Create a mind whose baseline temperament is `traits`
    pub fn new(grammar: G, traits: PersonalityTraits, config: MindConfig) -> Self {
        let MindConfig {
            development,
            decision,
            reward,
        } = config;
        Self {
            id: AgentId::new(),
            tick: 0,
            traits,
            emotion: Emotion::default(),
            development: PersonalityDevelopment::new(PersonalityBaseline::capture(&traits), development),
            superego: NormativeMemory::new(),
            subconscious: AssociativeMemory::new(),
            ego: DecisionEngine::new(grammar, decision),
            outcome: Box::new(reward),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Start from the given mood instead of a neutral one
    pub fn with_mood(mut self, mood: f64) -> Self {
        self.emotion = Emotion::new(mood);
        self
    }

    /// Make action sampling reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the reward function
    pub fn with_outcome_evaluator(mut self, evaluator: impl OutcomeEvaluator + Send + Sync + 'static) -> Self {
        self.outcome = Box::new(evaluator);
        self
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn mood(&self) -> f64 {
        self.emotion.mood()
    }

    pub fn traits(&self) -> &PersonalityTraits {
        &self.traits
    }

    pub fn baseline(&self) -> &PersonalityBaseline {
        self.development.baseline()
    }

    pub fn norms(&self) -> &Norms {
        self.superego.get_norms()
    }

    pub fn memory(&self) -> &AssociativeMemory {
        &self.subconscious
    }

    pub fn decision_engine(&self) -> &DecisionEngine<G> {
        &self.ego
    }

    /// Hand the experience log to the caller, leaving it empty
    pub fn drain_experiences(&mut self) -> Vec<Experience> {
        self.subconscious.drain()
    }

    /// Run one cognitive tick, sampling the action from the mind's own generator
    pub fn decide(&mut self, perception: &Perception) -> MindResult<Decision> {
        let draw: f64 = self.rng.random();
        self.decide_with_draw(perception, draw)
    }

    /// Run one cognitive tick with an explicit uniform draw in [0, 1)
    #[instrument(skip(self, perception), fields(agent = %self.id, tick = self.tick))]
    pub fn decide_with_draw(&mut self, perception: &Perception, draw: f64) -> MindResult<Decision> {
        let latent = self.subconscious.process(perception);
        let norms = self.superego.get_norms();
        let (utterance, action) = self
            .ego
            .generate(&latent, norms, &self.traits, self.emotion.mood(), draw)
            .inspect_err(|e| {
                counter!("mind.tick.failures").increment(1);
                warn!("Tick aborted before any update: {}", e);
            })?;

        let reward = self.outcome.evaluate(perception, &action);

        self.emotion.update(reward);
        self.development
            .update(&mut self.traits, perception, &action, reward, self.emotion.mood());
        self.superego.update(&action, reward);
        self.subconscious
            .record(self.tick, perception, &utterance, &action, reward);
        self.tick += 1;

        debug!(
            utterance = %utterance,
            action = %action,
            reward,
            mood = self.emotion.mood(),
            "Decided"
        );
        counter!("mind.ticks").increment(1);
        counter!("mind.actions", "verb" => action.verb().unwrap_or("none").to_string()).increment(1);
        histogram!("mind.reward").record(reward);
        gauge!("mind.mood").set(self.emotion.mood());
        gauge!("mind.norms").set(self.superego.len() as f64);
        gauge!("mind.experiences").set(self.subconscious.len() as f64);

        Ok(Decision {
            utterance,
            action,
            reward,
        })
    }
}

impl Mind<TokiPonaGrammar> {
    /// A mind speaking Toki Pona with default constants
    pub fn with_traits(traits: PersonalityTraits) -> Self {
        Self::new(TokiPonaGrammar::new(), traits, MindConfig::default())
    }
}
