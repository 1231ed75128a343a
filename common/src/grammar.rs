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

//! Toki Pona grammar collaborator
//!
//! The mind does not parse language. It builds a bare `subject verb` token sequence
//! and hands it to a [`Grammar`] which inserts the particles the sentence needs.
//! [`TokiPonaGrammar`] is a minimal lexicon-driven implementation covering the
//! declarative `subject [li] verb [e object]` form and the imperative `o verb` form.

use thiserror::Error;

/// Errors raised by a grammar collaborator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrammarError {
    /// The grammar refused to canonicalise the given tokens
    #[error("Grammar rejected '{}': {reason}", tokens.join(" "))]
    Rejected { tokens: Vec<String>, reason: String },

    /// The grammar backend is unavailable
    #[error("Grammar unavailable: {0}")]
    Unavailable(String),
}

/// Sentence grammar consumed by the decision engine.
///
/// `canonicalise` must be a pure function of its input.
pub trait Grammar {
    /// Return the canonical form of `tokens` with any required particles inserted
    fn canonicalise(&self, tokens: &[String]) -> Result<Vec<String>, GrammarError>;

    /// Check whether `tokens` form a well-formed sentence
    fn validate(&self, tokens: &[String]) -> bool;
}

/// Minimal grammar and lexicon for Toki Pona
#[derive(Debug, Clone, Copy, Default)]
pub struct TokiPonaGrammar;

impl TokiPonaGrammar {
    pub const SUBJECTS: [&'static str; 3] = ["mi", "sina", "jan"];
    pub const VERBS: [&'static str; 5] = ["tawa", "moku", "lon", "lukin", "sona"];
    pub const OBJECTS: [&'static str; 4] = ["kili", "ma", "tomo", "supa"];
    pub const PARTICLES: [&'static str; 5] = ["li", "e", "o", "la", "pi"];

    pub fn new() -> Self {
        Self
    }

    fn is_subject(word: &str) -> bool {
        Self::SUBJECTS.contains(&word)
    }

    fn is_verb(word: &str) -> bool {
        Self::VERBS.contains(&word)
    }

    fn is_object(word: &str) -> bool {
        Self::OBJECTS.contains(&word)
    }

    /// First and second person subjects take no `li`
    fn takes_li(subject: &str) -> bool {
        !matches!(subject, "mi" | "sina")
    }

    /// A simple default sentence: "mi sona" (I know)
    pub fn default_sentence(&self) -> Vec<String> {
        vec!["mi".to_string(), "sona".to_string()]
    }
}

impl Grammar for TokiPonaGrammar {
    fn canonicalise(&self, tokens: &[String]) -> Result<Vec<String>, GrammarError> {
        let Some((subject, rest)) = tokens.split_first() else {
            return Ok(Vec::new());
        };
        if subject == "o" {
            return Ok(tokens.to_vec());
        }

        let mut canonical = Vec::with_capacity(tokens.len() + 2);
        canonical.push(subject.clone());

        let mut rest = rest.iter().peekable();
        if Self::takes_li(subject) {
            if rest.peek().is_some_and(|word| *word == "li") {
                rest.next();
            }
            canonical.push("li".to_string());
        }

        if let Some(verb) = rest.next() {
            canonical.push(verb.clone());
            if Self::is_verb(verb) && rest.peek().is_some_and(|word| Self::is_object(word)) {
                canonical.push("e".to_string());
            }
        }
        canonical.extend(rest.cloned());

        Ok(canonical)
    }

    fn validate(&self, tokens: &[String]) -> bool {
        let Some(first) = tokens.first() else {
            return false;
        };

        // imperative: o VERB [e OBJECT]
        if first == "o" {
            return tokens.get(1).is_some_and(|verb| Self::is_verb(verb));
        }

        if !Self::is_subject(first) {
            return false;
        }
        let mut idx = 1;
        if Self::takes_li(first) {
            if tokens.get(idx).map(String::as_str) != Some("li") {
                return false;
            }
            idx += 1;
        }

        if !tokens.get(idx).is_some_and(|verb| Self::is_verb(verb)) {
            return false;
        }
        idx += 1;

        // optional object phrase
        if idx < tokens.len() {
            if tokens[idx] != "e" {
                return false;
            }
            idx += 1;
            return tokens.get(idx).is_some_and(|object| Self::is_object(object));
        }
        true
    }
}
