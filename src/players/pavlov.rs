use crate::*;

/// Win-stay, lose-shift: cooperates when both sides made the same move last round.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pavlov;

impl Strategy for Pavlov {
    fn decide(&mut self, me: &History, opponent: &History) -> anyhow::Result<Action> {
        match (me.last(), opponent.last()) {
            (Some(mine), Some(theirs)) if mine != theirs => Ok(Action::Defect),
            _ => Ok(Action::Cooperate),
        }
    }
}
