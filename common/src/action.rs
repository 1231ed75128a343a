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

//! Actions and utterances produced by the mind

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signature used for the empty action, which has no tokens to join
pub const NOOP_SIGNATURE: &str = "<noop>";

/// An ordered sequence of Toki Pona tokens describing a physical action.
///
/// The first token is the action verb; it drives both the world's physics and the
/// personality bias applied when the action is evaluated. An empty action means no
/// decision was possible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(Vec<String>);

impl Action {
    /// Create an action from its tokens
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The empty action
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// The action verb, if any
    pub fn verb(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical key for this action: its tokens joined in order
    pub fn signature(&self) -> String {
        if self.0.is_empty() {
            NOOP_SIGNATURE.to_string()
        } else {
            self.0.join(" ")
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}

/// The token sequence the agent speaks during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utterance(Vec<String>);

impl Utterance {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
