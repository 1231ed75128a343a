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

//! Kama Sona Common Types
//!
//! This crate defines the shared types exchanged between the world and the mind:
//! - Perception snapshots produced by the world each tick
//! - Actions and utterances produced by the mind
//! - The grammar collaborator used to canonicalise utterances

pub mod action;
pub mod grammar;
pub mod perception;

pub use action::{Action, Utterance, NOOP_SIGNATURE};
pub use grammar::{Grammar, GrammarError, TokiPonaGrammar};
pub use perception::{ObjectState, Perception, Position};
