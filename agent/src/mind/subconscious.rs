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

//! Associative memory: latent processing and the experience log

use kamasona_common::{Action, Perception, Utterance};
use serde::Serialize;

/// Latent representation of a perception handed to the decision engine
#[derive(Debug, Clone, PartialEq)]
pub struct LatentState {
    perception: Perception,
}

impl LatentState {
    pub fn perception(&self) -> &Perception {
        &self.perception
    }
}

/// One lived tick, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub tick: u64,
    pub perception: Perception,
    pub utterance: Utterance,
    pub action: Action,
    pub reward: f64,
}

/// Append-only log of experiences in the order they happened.
///
/// The log has no cap. Long-running callers are expected to [`drain`](Self::drain)
/// it periodically and persist what they need.
#[derive(Debug, Clone, Default)]
pub struct AssociativeMemory {
    experiences: Vec<Experience>,
}

impl AssociativeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a perception into the latent state consumed by the decision engine.
    ///
    /// Currently the identity encoding; it depends on the perception alone.
    pub fn process(&self, perception: &Perception) -> LatentState {
        LatentState {
            perception: perception.clone(),
        }
    }

    /// Append an experience to the log
    pub fn record(
        &mut self,
        tick: u64,
        perception: &Perception,
        utterance: &Utterance,
        action: &Action,
        reward: f64,
    ) {
        self.experiences.push(Experience {
            tick,
            perception: perception.clone(),
            utterance: utterance.clone(),
            action: action.clone(),
            reward,
        });
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn last(&self) -> Option<&Experience> {
        self.experiences.last()
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    /// Remove and return every recorded experience, oldest first
    pub fn drain(&mut self) -> Vec<Experience> {
        std::mem::take(&mut self.experiences)
    }
}
