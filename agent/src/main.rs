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


use clap::Parser;
use kamasona_agent::config::{Arguments, Configuration};
use kamasona_agent::simulation::{Simulation, write_experience_log};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    // Load configuration from a file with environment variable substitution
    let config = Configuration::load(&arguments.config_file)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let max_ticks = arguments.ticks.or(config.simulation.max_ticks);
    let dt = 1.0 / config.simulation.tick_rate;

    let mut simulation = Simulation::from_config(&config);
    tracing::info!(
        agent = %simulation.mind().id(),
        traits = %serde_json::to_string(simulation.mind().traits())?,
        "Starting Kama Sona agent..."
    );

    let mut interval = tokio::time::interval(config.simulation.tick_interval());
    loop {
        if max_ticks.is_some_and(|max| simulation.mind().tick() >= max) {
            tracing::info!("Reached tick limit");
            break;
        }
        tokio::select! {
            _ = interval.tick() => {
                match simulation.step(dt) {
                    Ok(decision) => tracing::info!(
                        tick = simulation.mind().tick(),
                        mood = simulation.mind().mood(),
                        reward = decision.reward,
                        "{}",
                        decision.utterance
                    ),
                    Err(e) => tracing::error!("Tick failed: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, shutting down");
                break;
            }
        }
    }

    let mind = simulation.mind();
    tracing::info!(
        ticks = mind.tick(),
        mood = mind.mood(),
        traits = %serde_json::to_string(mind.traits())?,
        baseline = %serde_json::to_string(mind.baseline().traits())?,
        norms = %serde_json::to_string(mind.norms())?,
        "Final state"
    );

    if let Some(path) = config.simulation.experience_log() {
        let experiences = simulation.mind_mut().drain_experiences();
        let file = std::io::BufWriter::new(std::fs::File::create(path)?);
        let written = write_experience_log(file, &experiences)?;
        tracing::info!("Wrote {} experiences to {}", written, path);
    }

    Ok(())
}
