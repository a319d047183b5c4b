use serde::Deserialize;
use serde::Serialize;

/// A single move in one round of an iterated two-player game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    /// The opposite move.
    pub fn flip(self) -> Self {
        match self {
            Self::Cooperate => Self::Defect,
            Self::Defect => Self::Cooperate,
        }
    }
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cooperate => write!(f, "C"),
            Self::Defect => write!(f, "D"),
        }
    }
}
