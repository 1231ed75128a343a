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

//! Normative memory: reinforcement weights keyed by action signature

use kamasona_common::Action;
use std::collections::BTreeMap;

/// Accumulated reinforcement weight for each action signature
pub type Norms = BTreeMap<String, f64>;

/// Sparse record of persistently reinforced behaviour.
///
/// Weights accumulate additively per action signature. An entry whose weight falls
/// to zero or below is evicted, so only positively reinforced behaviour survives.
#[derive(Debug, Clone, Default)]
pub struct NormativeMemory {
    norms: Norms,
}

impl NormativeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current norms
    pub fn get_norms(&self) -> &Norms {
        &self.norms
    }

    /// Weight currently held for an action, if it survives
    pub fn weight(&self, action: &Action) -> Option<f64> {
        self.norms.get(&action.signature()).copied()
    }

    /// Reinforce `action` by `reward`
    pub fn update(&mut self, action: &Action, reward: f64) {
        let key = action.signature();
        let weight = self.norms.get(&key).copied().unwrap_or(0.0) + reward;
        if weight > 0.0 {
            self.norms.insert(key, weight);
        } else if self.norms.remove(&key).is_some() {
            tracing::debug!(signature = %key, "Norm evicted");
        }
    }

    pub fn len(&self) -> usize {
        self.norms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.norms.is_empty()
    }
}
