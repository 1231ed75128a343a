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

//! The environment: world bodies, gravity and sunlight

use crate::world::components::{Avatar, Body, Velocity};
use crate::world::WorldError;
use hecs::{Entity, World};
use kamasona_common::{ObjectState, Position};

/// A 2D world with basic physics and lighting
pub struct Environment {
    world: World,
    /// Perceivable objects in spawn order
    objects: Vec<Entity>,
    width: f64,
    height: f64,
    gravity: f64,
    sunlight: f64,
    time: f64,
}

impl Environment {
    pub const DEFAULT_GRAVITY: f64 = 9.8;

    /// Create a world populated with a static tree and a movable rock
    pub fn new(width: f64, height: f64) -> Self {
        let mut environment = Self::empty(width, height);
        environment.spawn_object(Position::new(200.0, 0.0), false);
        environment.spawn_object(Position::new(400.0, 100.0), true);
        environment
    }

    /// Create a world with no objects in it
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            world: World::new(),
            objects: Vec::new(),
            width,
            height,
            gravity: Self::DEFAULT_GRAVITY,
            sunlight: 1.0,
            time: 0.0,
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Add a perceivable object
    pub fn spawn_object(&mut self, position: Position, movable: bool) -> Entity {
        let entity = self.world.spawn((position, Velocity::default(), Body::new(movable)));
        self.objects.push(entity);
        entity
    }

    /// Add the agent's body; it is not reported as a perceived object
    pub fn spawn_avatar(&mut self, position: Position, radius: f64) -> Entity {
        self.world.spawn((position, Avatar::new(radius)))
    }

    /// Sunlight intensity at a given world time
    pub fn sunlight_at(time: f64) -> f64 {
        (((time / 10.0).sin() + 1.0) / 2.0).max(0.0)
    }

    /// Advance the world by `dt` seconds
    pub fn update_physics(&mut self, dt: f64) {
        self.time += dt;
        self.sunlight = Self::sunlight_at(self.time);

        let gravity = self.gravity;
        for (position, velocity, body) in self
            .world
            .query_mut::<(&mut Position, &mut Velocity, &Body)>()
        {
            if !body.movable {
                continue;
            }
            velocity.y -= gravity * dt;
            position.x += velocity.x * dt;
            position.y += velocity.y * dt;

            // ground collision
            if position.y < 0.0 {
                position.y = 0.0;
                velocity.y = 0.0;
            }
        }
    }

    /// Observable state of every object, in spawn order
    pub fn object_states(&self) -> Vec<ObjectState> {
        self.objects
            .iter()
            .filter_map(|&entity| {
                let position = self.world.get::<&Position>(entity).ok()?;
                let body = self.world.get::<&Body>(entity).ok()?;
                Some(ObjectState::new(*position, body.movable))
            })
            .collect()
    }

    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|position| *position)
    }

    /// Position of an avatar entity
    pub fn avatar_position(&self, avatar: Entity) -> Result<Position, WorldError> {
        if self.world.get::<&Avatar>(avatar).is_err() {
            return Err(WorldError::NoAvatar(avatar));
        }
        self.position(avatar).ok_or(WorldError::NoAvatar(avatar))
    }

    /// Shift an avatar horizontally, keeping its whole body inside the world
    pub fn move_avatar(&mut self, avatar: Entity, dx: f64) -> Result<Position, WorldError> {
        let radius = self
            .world
            .get::<&Avatar>(avatar)
            .map(|avatar| avatar.radius)
            .map_err(|_| WorldError::NoAvatar(avatar))?;
        let mut position = self
            .world
            .get::<&mut Position>(avatar)
            .map_err(|_| WorldError::NoAvatar(avatar))?;

        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        let target = position.x + dx;
        if target.is_nan() {
            return Ok(*position);
        }
        let max_x = (self.width - radius).max(radius);
        position.x = target.clamp(radius, max_x);
        Ok(*position)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn sunlight(&self) -> f64 {
        self.sunlight
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("world", &"hecs::World")
            .field("objects", &self.objects.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("gravity", &self.gravity)
            .field("sunlight", &self.sunlight)
            .field("time", &self.time)
            .finish()
    }
}
