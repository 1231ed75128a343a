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

//! Embodiment: the adapter between a mind and the environment it lives in
//!
//! Swap the adapter to plug the same mind into a different world.

use crate::world::{Environment, WorldError};
use hecs::Entity;
use kamasona_common::{Action, Perception};
use serde::{Deserialize, Serialize};

/// Default adapter for the built-in 2D environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAdapter {
    /// Horizontal distance covered by one `tawa`
    pub step_size: f64,
}

impl EnvironmentAdapter {
    pub fn new(step_size: f64) -> Self {
        Self { step_size }
    }

    /// Snapshot what the avatar senses right now
    pub fn perceive(&self, environment: &Environment, avatar: Entity) -> Result<Perception, WorldError> {
        Ok(Perception {
            position: environment.avatar_position(avatar)?,
            objects: environment.object_states(),
            sunlight: environment.sunlight(),
        })
    }

    /// Carry out an action chosen by the mind
    pub fn apply_action(
        &self,
        environment: &mut Environment,
        avatar: Entity,
        action: &Action,
    ) -> Result<(), WorldError> {
        let Some(verb) = action.verb() else {
            return Ok(());
        };
        match verb {
            "tawa" => {
                let position = environment.move_avatar(avatar, self.step_size)?;
                tracing::trace!(x = position.x, "Avatar moved");
            }
            "lon" => {}
            other => tracing::trace!(verb = other, "Action has no physical effect"),
        }
        Ok(())
    }
}

impl Default for EnvironmentAdapter {
    fn default() -> Self {
        Self::new(5.0)
    }
}
