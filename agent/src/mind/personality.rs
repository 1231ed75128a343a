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

//! Big Five personality traits and the temperament baseline they drift around

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five personality dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    /// Every trait, in canonical order
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Trait::Openness => "openness",
            Trait::Conscientiousness => "conscientiousness",
            Trait::Extraversion => "extraversion",
            Trait::Agreeableness => "agreeableness",
            Trait::Neuroticism => "neuroticism",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The agent's five trait scores, each always within [0, 1].
///
/// Owned by the mind. Everything but personality development reads it through a
/// shared reference; only development holds the crate-private setter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalityTraits {
    openness: f64,
    conscientiousness: f64,
    extraversion: f64,
    agreeableness: f64,
    neuroticism: f64,
}

impl PersonalityTraits {
    /// Create a trait vector, clamping every score into [0, 1]
    pub fn new(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> Self {
        Self {
            openness: clamp_unit(openness),
            conscientiousness: clamp_unit(conscientiousness),
            extraversion: clamp_unit(extraversion),
            agreeableness: clamp_unit(agreeableness),
            neuroticism: clamp_unit(neuroticism),
        }
    }

    /// Every trait set to the same score
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub fn get(&self, which: Trait) -> f64 {
        match which {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    pub(in crate::mind) fn set(&mut self, which: Trait, value: f64) {
        let value = clamp_unit(value);
        match which {
            Trait::Openness => self.openness = value,
            Trait::Conscientiousness => self.conscientiousness = value,
            Trait::Extraversion => self.extraversion = value,
            Trait::Agreeableness => self.agreeableness = value,
            Trait::Neuroticism => self.neuroticism = value,
        }
    }

    pub fn openness(&self) -> f64 {
        self.openness
    }

    pub fn conscientiousness(&self) -> f64 {
        self.conscientiousness
    }

    pub fn extraversion(&self) -> f64 {
        self.extraversion
    }

    pub fn agreeableness(&self) -> f64 {
        self.agreeableness
    }

    pub fn neuroticism(&self) -> f64 {
        self.neuroticism
    }

    /// Iterate over `(trait, score)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.into_iter().map(move |which| (which, self.get(which)))
    }
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Frozen snapshot of the agent's innate temperament.
///
/// Captured once when the mind is built. Personality development pulls the live
/// traits back toward it so drift stays anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalityBaseline(PersonalityTraits);

impl PersonalityBaseline {
    pub fn capture(traits: &PersonalityTraits) -> Self {
        Self(*traits)
    }

    pub fn get(&self, which: Trait) -> f64 {
        self.0.get(which)
    }

    pub fn traits(&self) -> &PersonalityTraits {
        &self.0
    }
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
