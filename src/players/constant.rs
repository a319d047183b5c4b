use crate::*;

/// Cooperates unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooperator;

impl Strategy for Cooperator {
    fn decide(&mut self, _: &History, _: &History) -> anyhow::Result<Action> {
        Ok(Action::Cooperate)
    }
}

/// Defects unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defector;

impl Strategy for Defector {
    fn decide(&mut self, _: &History, _: &History) -> anyhow::Result<Action> {
        Ok(Action::Defect)
    }
}
