use crate::*;

/// Cooperates first, then repeats the opponent's previous move.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&mut self, _: &History, opponent: &History) -> anyhow::Result<Action> {
        Ok(opponent.last().unwrap_or(Action::Cooperate))
    }
}

/// Defects only after two consecutive opponent defections.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTwoTats;

impl Strategy for TitForTwoTats {
    fn decide(&mut self, _: &History, opponent: &History) -> anyhow::Result<Action> {
        match opponent.recent(2) {
            [Action::Defect, Action::Defect] => Ok(Action::Defect),
            _ => Ok(Action::Cooperate),
        }
    }
}
