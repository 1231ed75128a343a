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


//! The simulation loop tying a mind to its environment

use crate::config::Configuration;
use crate::mind::{Decision, Experience, Mind, MindError};
use crate::world::{Entity, Environment, EnvironmentAdapter, WorldError};
use kamasona_common::{Grammar, Position, TokiPonaGrammar, Utterance};
use std::io::Write;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Mind error: {0}")]
    Mind(#[from] MindError),

    #[error("World error: {0}")]
    World(#[from] WorldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write experiences as JSON lines, one experience per line
pub fn write_experience_log<W: Write>(mut writer: W, experiences: &[Experience]) -> Result<usize, SimulationError> {
    for experience in experiences {
        serde_json::to_writer(&mut writer, experience)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(experiences.len())
}

/// One agent embodied in one environment
#[derive(Debug)]
pub struct Simulation<G: Grammar = TokiPonaGrammar> {
    environment: Environment,
    adapter: EnvironmentAdapter,
    mind: Mind<G>,
    avatar: Entity,
    last_utterance: Option<Utterance>,
}

impl<G: Grammar> Simulation<G> {
    /// Place `mind` in `environment` with its avatar at the horizontal centre
    pub fn new(mut environment: Environment, adapter: EnvironmentAdapter, mind: Mind<G>, radius: f64) -> Self {
        let start = Position::new(environment.width() / 2.0, 0.0);
        let avatar = environment.spawn_avatar(start, radius);
        Self {
            environment,
            adapter,
            mind,
            avatar,
            last_utterance: None,
        }
    }

    /// Advance the world by `dt` seconds and let the mind act once
    #[instrument(skip(self), fields(agent = %self.mind.id()))]
    pub fn step(&mut self, dt: f64) -> Result<Decision, SimulationError> {
        self.environment.update_physics(dt);
        let perception = self.adapter.perceive(&self.environment, self.avatar)?;
        let decision = self.mind.decide(&perception)?;
        self.adapter
            .apply_action(&mut self.environment, self.avatar, &decision.action)?;
        self.last_utterance = Some(decision.utterance.clone());
        Ok(decision)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn mind(&self) -> &Mind<G> {
        &self.mind
    }

    pub fn mind_mut(&mut self) -> &mut Mind<G> {
        &mut self.mind
    }

    pub fn avatar(&self) -> Entity {
        self.avatar
    }

    pub fn avatar_position(&self) -> Result<Position, WorldError> {
        self.environment.avatar_position(self.avatar)
    }

    /// What the agent said on the most recent successful tick
    pub fn last_utterance(&self) -> Option<&Utterance> {
        self.last_utterance.as_ref()
    }
}

impl Simulation<TokiPonaGrammar> {
    /// Build the default world and a Toki Pona speaking mind from configuration
    pub fn from_config(config: &Configuration) -> Self {
        let simulation = &config.simulation;
        let mut mind = Mind::new(TokiPonaGrammar::new(), config.personality.traits(), config.mind_config())
            .with_mood(config.personality.mood);
        if let Some(seed) = simulation.seed() {
            mind = mind.with_seed(seed);
        }
        Self::new(
            Environment::new(simulation.width, simulation.height),
            EnvironmentAdapter::new(simulation.step_size),
            mind,
            simulation.agent_radius,
        )
    }
}
