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

//! Components attached to world entities
//!
//! Positions use [`kamasona_common::Position`] directly.

use serde::{Deserialize, Serialize};

/// Linear velocity in world units per second
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// A physical object in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Whether gravity and velocity apply
    pub movable: bool,
    pub radius: f64,
}

impl Body {
    pub fn new(movable: bool) -> Self {
        Self {
            movable,
            radius: 10.0,
        }
    }
}

/// Marks the entity the agent's mind inhabits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub radius: f64,
}

impl Avatar {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}
