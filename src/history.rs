use crate::*;

/// One side's view of a game in progress: moves so far and running score.
///
/// The host engine owns and updates these; strategies only read them.
/// Every decision receives two views, its own and its opponent's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<Action>,
    score: Score,
}

impl History {
    /// Records a played move and the payoff it earned.
    pub fn push(&mut self, action: Action, payoff: Score) {
        self.moves.push(action);
        self.score += payoff;
    }
    pub fn moves(&self) -> &[Action] {
        &self.moves
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn last(&self) -> Option<Action> {
        self.moves.last().copied()
    }
    /// The last `n` moves, oldest first. Shorter if fewer were played.
    pub fn recent(&self, n: usize) -> &[Action] {
        &self.moves[self.moves.len().saturating_sub(n)..]
    }
    pub fn rounds(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    pub fn defections(&self) -> usize {
        self.moves.iter().filter(|a| a.is_defect()).count()
    }
    pub fn cooperations(&self) -> usize {
        self.rounds() - self.defections()
    }
}

impl From<Vec<Action>> for History {
    fn from(moves: Vec<Action>) -> Self {
        Self { moves, score: 0 }
    }
}
