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

//! Perception snapshots handed from the world to the mind

use serde::{Deserialize, Serialize};

/// A point in the 2D world, in world units with y pointing up from the ground
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Observable state of a single world object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectState {
    pub position: Position,
    pub movable: bool,
}

impl ObjectState {
    pub fn new(position: impl Into<Position>, movable: bool) -> Self {
        Self {
            position: position.into(),
            movable,
        }
    }
}

/// Read-only snapshot of everything the agent senses during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Perception {
    /// Position of the agent's own body
    pub position: Position,
    /// Objects in the world, in the order the world reports them
    pub objects: Vec<ObjectState>,
    /// Sunlight intensity in [0, 1]
    pub sunlight: f64,
}

impl Perception {
    /// Create a perception with no objects
    pub fn new(position: impl Into<Position>, sunlight: f64) -> Self {
        Self {
            position: position.into(),
            objects: Vec::new(),
            sunlight,
        }
    }

    /// Add an object to the snapshot
    pub fn with_object(mut self, object: ObjectState) -> Self {
        self.objects.push(object);
        self
    }

    /// Number of objects perceived
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perception_builder() {
        let perception = Perception::new((10.0, 0.0), 0.75)
            .with_object(ObjectState::new((200.0, 0.0), false))
            .with_object(ObjectState::new((400.0, 100.0), true));

        assert_eq!(perception.position, Position::new(10.0, 0.0));
        assert_eq!(perception.object_count(), 2);
        assert!(!perception.objects[0].movable);
        assert!(perception.objects[1].movable);
        assert_eq!(perception.sunlight, 0.75);
    }

    #[test]
    fn test_perception_serialization() {
        let perception = Perception::new((1.0, 2.0), 0.5).with_object(ObjectState::new((3.0, 4.0), true));
        let json = serde_json::to_string(&perception).unwrap();
        assert!(json.contains("\"sunlight\":0.5"));
        assert!(json.contains("\"movable\":true"));
    }
}
