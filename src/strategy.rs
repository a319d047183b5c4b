use crate::*;

/// Trait for anything that makes decisions in an iterated two-player game.
/// Concrete behaviors, abstract placeholders, and composites all implement it,
/// so the host engine never needs to know which one it is driving.
pub trait Strategy: Send {
    /// Choose the next move given both sides' views of the game.
    /// Errors are the strategy's own and reach the caller unchanged.
    fn decide(&mut self, me: &History, opponent: &History) -> anyhow::Result<Action>;
    /// New-game signal from the host engine.
    /// Default implementation is a no-op for stateless strategies.
    fn reset(&mut self) {}
}

/// A member that descends from the base type without inheriting any behavior.
/// Asking it to decide is an error.
#[derive(Debug, Clone)]
pub struct Abstract(pub String);

impl Strategy for Abstract {
    fn decide(&mut self, _: &History, _: &History) -> anyhow::Result<Action> {
        Err(anyhow::anyhow!("{} does not implement decide", self.0))
    }
}
