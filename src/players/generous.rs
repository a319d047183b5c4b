use crate::*;

/// Tit-for-tat that answers a defection with cooperation
/// with probability `forgiveness`.
#[derive(Debug, Clone)]
pub struct GenerousTitForTat {
    dice: Dice,
    forgiveness: Probability,
}

impl GenerousTitForTat {
    pub fn new(dice: Dice, forgiveness: Probability) -> Self {
        Self { dice, forgiveness }
    }
}

impl Strategy for GenerousTitForTat {
    fn decide(&mut self, _: &History, opponent: &History) -> anyhow::Result<Action> {
        match opponent.last() {
            Some(Action::Defect) if !self.dice.chance(self.forgiveness) => Ok(Action::Defect),
            _ => Ok(Action::Cooperate),
        }
    }
}
