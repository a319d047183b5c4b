use crate::*;

/// Per-instance, per-game delegation state of a composite.
#[derive(Default)]
pub enum Binding {
    /// No decision requested since the last new-game signal.
    #[default]
    Unbound,
    /// Delegating to `strategy` until the next new-game signal.
    Bound {
        name: String,
        strategy: Box<dyn Strategy>,
    },
}

impl Binding {
    /// Name of the bound candidate, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unbound => None,
            Self::Bound { name, .. } => Some(name),
        }
    }
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbound => write!(f, "Unbound"),
            Self::Bound { name, .. } => f.debug_tuple("Bound").field(name).finish(),
        }
    }
}
