use crate::*;

/// Random player that flips a fair coin every round.
/// Draws from the shared dice so seeded runs replay exactly.
#[derive(Debug, Clone)]
pub struct Fish(Dice);

impl Fish {
    pub fn new(dice: Dice) -> Self {
        Self(dice)
    }
}

impl Strategy for Fish {
    fn decide(&mut self, _: &History, _: &History) -> anyhow::Result<Action> {
        if self.0.chance(0.5) {
            Ok(Action::Cooperate)
        } else {
            Ok(Action::Defect)
        }
    }
}
