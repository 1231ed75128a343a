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

use crate::mind::{DecisionConfig, DevelopmentConfig, MindConfig, PersonalityTraits, SunlightReward};
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "agent/config.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = "agent/.env"
    )]
    pub env_file: Option<String>,

    #[arg(short = 't', long = "ticks", help = "Stop after this many ticks")]
    pub ticks: Option<u64>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            config_file: "config.yaml".to_string(),
            env_file: Some(".env".to_string()),
            ticks: None,
        }
    }
}

/// Errors raised while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub simulation: SimulationConfig,
    pub personality: PersonalityConfig,
    pub development: DevelopmentConfig,
    pub decision: DecisionConfig,
    pub reward: SunlightReward,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Configuration, ConfigError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_string(),
            source,
        })?;
        let conf: Configuration = serde_yaml::from_reader(file)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let simulation = &self.simulation;
        if !(simulation.tick_rate > 0.0 && simulation.tick_rate.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "tick_rate must be positive, got {}",
                simulation.tick_rate
            )));
        }
        if !(simulation.width > 0.0 && simulation.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "world must have a positive size, got {}x{}",
                simulation.width, simulation.height
            )));
        }
        if !(simulation.agent_radius >= 0.0 && simulation.agent_radius.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "agent_radius must be finite and not negative, got {}",
                simulation.agent_radius
            )));
        }
        if !simulation.step_size.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "step_size must be finite, got {}",
                simulation.step_size
            )));
        }
        Ok(())
    }

    /// Constants for every layer of the mind
    pub fn mind_config(&self) -> MindConfig {
        MindConfig {
            development: self.development.clone(),
            decision: self.decision.clone(),
            reward: self.reward.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    /// Ticks per second
    pub tick_rate: f64,
    pub max_ticks: Option<u64>,
    /// Seed for reproducible action sampling
    pub seed: Option<EnvField<u64>>,
    /// Where to write the experience log as JSON lines on shutdown
    pub experience_log: Option<EnvField<String>>,
    pub step_size: f64,
    pub agent_radius: f64,
}

impl SimulationConfig {
    pub fn seed(&self) -> Option<u64> {
        self.seed.as_ref().map(|seed| **seed)
    }

    pub fn experience_log(&self) -> Option<&str> {
        self.experience_log.as_ref().map(|path| path.as_str())
    }

    /// Wall-clock time between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            tick_rate: 60.0,
            max_ticks: None,
            seed: None,
            experience_log: None,
            step_size: 5.0,
            agent_radius: 10.0,
        }
    }
}

/// Innate temperament and starting mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityConfig {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    pub mood: f64,
}

impl PersonalityConfig {
    pub fn traits(&self) -> PersonalityTraits {
        PersonalityTraits::new(
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        )
    }
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            openness: 0.5,
            conscientiousness: 0.5,
            extraversion: 0.5,
            agreeableness: 0.5,
            neuroticism: 0.5,
            mood: 0.0,
        }
    }
}
