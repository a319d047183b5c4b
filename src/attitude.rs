use serde::Deserialize;
use serde::Serialize;

/// Behavioral category used to group strategies into composite pools.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attitude {
    Aggressive,
    Cooperative,
    Neutral,
}

impl Attitude {
    /// All attitudes, in pool construction order.
    pub const fn all() -> [Self; 3] {
        [Self::Aggressive, Self::Cooperative, Self::Neutral]
    }
}

impl std::fmt::Display for Attitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aggressive => write!(f, "Aggressive"),
            Self::Cooperative => write!(f, "Cooperative"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}
