use crate::*;
use std::sync::Arc;

/// Constructor for a fresh strategy instance.
pub type Spawn = Arc<dyn Fn(&Dice) -> Box<dyn Strategy> + Send + Sync>;

/// The addressable representation of one concrete strategy.
///
/// Created once per discovered member and never mutated; clones share the
/// constructor. Identity is the name, which is unique within a registry.
#[derive(Clone)]
pub struct Descriptor {
    name: String,
    attitude: Option<Attitude>,
    spawn: Spawn,
}

impl Descriptor {
    pub fn new<F>(name: impl Into<String>, attitude: Option<Attitude>, spawn: F) -> Self
    where
        F: Fn(&Dice) -> Box<dyn Strategy> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            attitude,
            spawn: Arc::new(spawn),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Declared or inherited attitude. None means unclassified.
    pub fn attitude(&self) -> Option<Attitude> {
        self.attitude
    }
    /// Fresh instance of this strategy drawing randomness from `dice`.
    pub fn spawn(&self, dice: &Dice) -> Box<dyn Strategy> {
        (self.spawn)(dice)
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Descriptor {}

impl PartialOrd for Descriptor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Descriptor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("attitude", &self.attitude)
            .finish()
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.attitude {
            Some(attitude) => write!(f, "{} ({})", self.name, attitude),
            None => write!(f, "{} (unclassified)", self.name),
        }
    }
}
