//! Study-aid mode
//!
//! Closed set of generation modes. The wire form is lowercase; anything
//! outside the four known values is rejected at the request boundary
//! before prompt construction runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested kind of study aid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Detailed explanation of a topic
    Explain,
    /// Bullet-point summary of notes
    Summarize,
    /// Multiple-choice practice quiz
    Quiz,
    /// Front/back study flashcards
    Flashcard,
}

impl Mode {
    /// All modes, in UI order
    pub const ALL: [Mode; 4] = [Mode::Explain, Mode::Summarize, Mode::Quiz, Mode::Flashcard];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Explain => "explain",
            Mode::Summarize => "summarize",
            Mode::Quiz => "quiz",
            Mode::Flashcard => "flashcard",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized mode string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "explain" => Ok(Mode::Explain),
            "summarize" => Ok(Mode::Summarize),
            "quiz" => Ok(Mode::Quiz),
            "flashcard" => Ok(Mode::Flashcard),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
