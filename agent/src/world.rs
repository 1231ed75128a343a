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

//! Headless 2D world
//!
//! The world is a hecs ECS world of simple bodies: static and movable objects plus
//! the agent's avatar. It applies gravity and an oscillating sunlight cycle and
//! exposes what the agent perceives through the [`EnvironmentAdapter`].

pub use hecs::{Entity, World};

mod components;
mod embodiment;
mod environment;

pub use self::components::{Avatar, Body, Velocity};
pub use self::embodiment::EnvironmentAdapter;
pub use self::environment::Environment;

use thiserror::Error;

/// Errors raised when the world is asked about an entity it cannot resolve
#[derive(Debug, Error)]
pub enum WorldError {
    /// The entity does not exist or lacks the components required
    #[error("Entity {0:?} has no avatar body")]
    NoAvatar(Entity),
}
