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

//! Outcome evaluation: the reward signal for a chosen action

use kamasona_common::{Action, Perception};
use serde::{Deserialize, Serialize};

/// Scores the outcome of an action in the world that was perceived.
///
/// Implementations must be pure functions of their inputs.
pub trait OutcomeEvaluator {
    fn evaluate(&self, perception: &Perception, action: &Action) -> f64;
}

impl<F> OutcomeEvaluator for F
where
    F: Fn(&Perception, &Action) -> f64,
{
    fn evaluate(&self, perception: &Perception, action: &Action) -> f64 {
        self(perception, action)
    }
}

/// Rewards movement in proportion to sunlight and mildly punishes inaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunlightReward {
    /// Verb that counts as moving
    pub move_verb: String,
    /// Reward when no action was taken at all
    pub inaction_penalty: f64,
}

impl Default for SunlightReward {
    fn default() -> Self {
        Self {
            move_verb: "tawa".to_string(),
            inaction_penalty: -0.1,
        }
    }
}

impl OutcomeEvaluator for SunlightReward {
    fn evaluate(&self, perception: &Perception, action: &Action) -> f64 {
        match action.verb() {
            None => self.inaction_penalty,
            Some(verb) if verb == self.move_verb => perception.sunlight,
            Some(_) => 0.0,
        }
    }
}
