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


//! Integration tests for the embodied simulation loop

use kamasona_agent::config::Configuration;
use kamasona_agent::mind::{Mind, PersonalityTraits};
use kamasona_agent::simulation::{Simulation, write_experience_log};
use kamasona_agent::world::{Environment, EnvironmentAdapter, WorldError};
use kamasona_common::Position;
use std::io::BufRead;

/// Configuration with a fixed seed and only the move candidate
fn walking_config() -> Configuration {
    let mut config = Configuration::default();
    config.decision.candidates.retain(|c| c.action.verb() == Some("tawa"));
    config
}

#[test]
fn test_seeded_simulations_are_reproducible() {
    let run = || {
        let config: Configuration = serde_yaml::from_str("simulation:\n  seed: \"42\"\n").unwrap();
        assert_eq!(config.simulation.seed(), Some(42));
        let mut simulation = Simulation::from_config(&config);
        let utterances: Vec<String> = (0..30)
            .map(|_| simulation.step(1.0 / 60.0).unwrap().utterance.to_string())
            .collect();
        (utterances, simulation.avatar_position().unwrap())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_avatar_stops_at_world_edge() {
    let mut config = walking_config();
    config.simulation.width = 100.0;
    let mut simulation = Simulation::from_config(&config);
    assert_eq!(simulation.avatar_position().unwrap(), Position::new(50.0, 0.0));

    for _ in 0..20 {
        simulation.step(0.1).unwrap();
    }
    assert_eq!(simulation.avatar_position().unwrap().x, 90.0);
    assert_eq!(simulation.mind().tick(), 20);
}

#[test]
fn test_movable_objects_fall_to_ground() {
    let mut simulation = Simulation::from_config(&Configuration::default());
    for _ in 0..200 {
        simulation.step(0.1).unwrap();
    }
    let objects = simulation.environment().object_states();
    assert_eq!(objects[0].position, Position::new(200.0, 0.0));
    assert!(objects[1].movable);
    assert_eq!(objects[1].position.y, 0.0);
}

#[test]
fn test_perceived_sunlight_drives_reward() {
    let mut simulation = Simulation::from_config(&walking_config());
    let decision = simulation.step(5.0).unwrap();
    assert_eq!(decision.reward, Environment::sunlight_at(5.0));
    assert_eq!(simulation.mind().memory().experiences()[0].perception.sunlight, decision.reward);
}

#[test]
fn test_missing_avatar_is_reported() {
    let mut environment = Environment::new(800.0, 600.0);
    let stray = environment.spawn_object(Position::new(10.0, 0.0), false);
    let adapter = EnvironmentAdapter::default();

    let result = adapter.perceive(&environment, stray);
    assert!(matches!(result, Err(WorldError::NoAvatar(entity)) if entity == stray));
}

#[test]
fn test_custom_environment() {
    let mut environment = Environment::empty(300.0, 200.0).with_gravity(0.0);
    environment.spawn_object(Position::new(20.0, 50.0), true);
    let mind = Mind::with_traits(PersonalityTraits::uniform(0.5)).with_seed(9);
    let mut simulation = Simulation::new(environment, EnvironmentAdapter::new(2.0), mind, 5.0);

    for _ in 0..10 {
        simulation.step(0.1).unwrap();
    }
    let objects = simulation.environment().object_states();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].position, Position::new(20.0, 50.0));
    assert!(simulation.avatar_position().unwrap().x >= 150.0);
    assert!(simulation.last_utterance().is_some());
}

#[test]
fn test_experience_log_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("experience.jsonl");

    let mut simulation = Simulation::from_config(&walking_config());
    for _ in 0..5 {
        simulation.step(0.5).unwrap();
    }
    let experiences = simulation.mind_mut().drain_experiences();
    let file = std::io::BufWriter::new(std::fs::File::create(&path).unwrap());
    assert_eq!(write_experience_log(file, &experiences).unwrap(), 5);

    let reader = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
    let ticks: Vec<u64> = reader
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(&line.unwrap()).unwrap();
            assert_eq!(value["action"][0], "tawa");
            value["tick"].as_u64().unwrap()
        })
        .collect();
    assert_eq!(ticks, vec![0, 1, 2, 3, 4]);
}
