use crate::*;

/// Cooperates and defects in turn, opening with cooperation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alternator;

impl Strategy for Alternator {
    fn decide(&mut self, me: &History, _: &History) -> anyhow::Result<Action> {
        Ok(me.last().map(Action::flip).unwrap_or(Action::Cooperate))
    }
}
