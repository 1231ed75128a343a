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

//! Short-term emotional state

use serde::{Deserialize, Serialize};

/// Lowest possible mood
pub const MOOD_MIN: f64 = -1.0;
/// Highest possible mood
pub const MOOD_MAX: f64 = 1.0;

/// A single mood scalar tracking the agent's short-term emotional valence.
///
/// Mood is always in `[MOOD_MIN, MOOD_MAX]`. Rewards shift it additively and the
/// result is clamped after every update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    mood: f64,
}

impl Emotion {
    /// Create an emotion with the given initial mood, clamped into range
    pub fn new(mood: f64) -> Self {
        Self {
            mood: clamp_mood(mood),
        }
    }

    pub fn mood(&self) -> f64 {
        self.mood
    }

    /// Shift mood by `reward`.
    ///
    /// A NaN reward carries no valence and leaves mood untouched.
    pub fn update(&mut self, reward: f64) {
        if reward.is_nan() {
            tracing::warn!("Ignoring NaN reward in emotion update");
            return;
        }
        self.mood = clamp_mood(self.mood + reward);
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn clamp_mood(mood: f64) -> f64 {
    if mood.is_nan() {
        0.0
    } else {
        mood.clamp(MOOD_MIN, MOOD_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_emotion_default() {
        assert_eq!(Emotion::default().mood(), 0.0);
    }

    #[test]
    fn test_emotion_initial_mood_clamped() {
        assert_eq!(Emotion::new(3.0).mood(), 1.0);
        assert_eq!(Emotion::new(-7.5).mood(), -1.0);
        assert_eq!(Emotion::new(0.25).mood(), 0.25);
    }

    #[test]
    fn test_emotion_update() {
        let mut emotion = Emotion::default();
        emotion.update(0.4);
        assert!((emotion.mood() - 0.4).abs() < 1e-12);
        emotion.update(1.0);
        assert_eq!(emotion.mood(), 1.0);
        emotion.update(-2.5);
        assert_eq!(emotion.mood(), -1.0);
        emotion.update(-0.1);
        assert_eq!(emotion.mood(), -1.0);
    }

    #[test]
    fn test_emotion_ignores_nan() {
        let mut emotion = Emotion::new(0.3);
        emotion.update(f64::NAN);
        assert_eq!(emotion.mood(), 0.3);
    }

    proptest! {
        #[test]
        fn prop_update_is_clamped_sum(initial in -1.0f64..=1.0, reward in -10.0f64..10.0) {
            let mut emotion = Emotion::new(initial);
            emotion.update(reward);
            prop_assert_eq!(emotion.mood(), (initial + reward).clamp(MOOD_MIN, MOOD_MAX));
        }

        #[test]
        fn prop_mood_stays_bounded(
            initial in -5.0f64..5.0,
            rewards in proptest::collection::vec(-5.0f64..5.0, 0..64),
        ) {
            let mut emotion = Emotion::new(initial);
            prop_assert!((MOOD_MIN..=MOOD_MAX).contains(&emotion.mood()));
            for reward in rewards {
                emotion.update(reward);
                prop_assert!((MOOD_MIN..=MOOD_MAX).contains(&emotion.mood()));
            }
        }
    }
}
