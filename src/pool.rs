use crate::*;

/// Candidates one composite type chooses among.
///
/// Non-empty by construction and never mutated afterwards, so one pool is
/// shared by every instance of its composite type, across threads if need be.
#[derive(Debug, Clone)]
pub struct Pool {
    attitude: Attitude,
    suffix: String,
    candidates: Vec<Descriptor>,
}

impl Pool {
    /// Descriptors of `attitude` whose names end with `suffix`, in name order.
    pub fn new(registry: &Registry, attitude: Attitude, suffix: &str) -> Result<Self, Error> {
        let candidates = registry
            .attitude(attitude)
            .filter(|d| d.name().ends_with(suffix))
            .cloned()
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Err(Error::EmptyPool {
                attitude,
                suffix: suffix.to_string(),
            });
        }
        log::debug!(
            "[pool] {}{}: {}",
            attitude,
            suffix,
            candidates
                .iter()
                .map(Descriptor::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self {
            attitude,
            suffix: suffix.to_string(),
            candidates,
        })
    }
    pub fn attitude(&self) -> Attitude {
        self.attitude
    }
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
    pub fn candidates(&self) -> &[Descriptor] {
        &self.candidates
    }
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
    /// Uniform draw from the candidates.
    pub fn choose(&self, dice: &Dice) -> &Descriptor {
        &self.candidates[dice.index(self.candidates.len())]
    }
}
