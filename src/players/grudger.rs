use crate::*;

/// Cooperates until the opponent defects once, then defects for the rest of the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grudger {
    betrayed: bool,
}

impl Strategy for Grudger {
    fn decide(&mut self, _: &History, opponent: &History) -> anyhow::Result<Action> {
        self.betrayed |= opponent.defections() > 0;
        if self.betrayed {
            Ok(Action::Defect)
        } else {
            Ok(Action::Cooperate)
        }
    }
    fn reset(&mut self) {
        self.betrayed = false;
    }
}
