use crate::*;
use std::sync::Arc;

/// A composite strategy type: one attitude, one candidate pool.
///
/// Instances spawned from it share the pool and the dice. Each instance
/// picks one candidate per game and plays that candidate's moves for the
/// whole game.
#[derive(Debug, Clone)]
pub struct Ensemble {
    name: String,
    pool: Arc<Pool>,
    dice: Dice,
}

impl Ensemble {
    /// Fails with [`Error::EmptyPool`] when no candidate qualifies,
    /// before any game is played.
    pub fn new(
        registry: &Registry,
        attitude: Attitude,
        suffix: &str,
        dice: &Dice,
    ) -> Result<Self, Error> {
        let pool = Pool::new(registry, attitude, suffix)?;
        Ok(Self {
            name: format!("{}_Composite{}", attitude, suffix),
            pool: Arc::new(pool),
            dice: dice.clone(),
        })
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn attitude(&self) -> Attitude {
        self.pool.attitude()
    }
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
    /// Fresh, unbound instance.
    pub fn spawn(&self) -> Composite {
        Composite {
            name: self.name.clone(),
            pool: Arc::clone(&self.pool),
            dice: self.dice.clone(),
            binding: Binding::Unbound,
        }
    }
    /// This composite type as a descriptor, so it can be registered
    /// wherever a concrete strategy is expected. Instances keep drawing
    /// from this ensemble's dice.
    pub fn descriptor(&self) -> Descriptor {
        let ensemble = self.clone();
        Descriptor::new(self.name.clone(), Some(self.attitude()), move |_| {
            Box::new(ensemble.spawn())
        })
    }
}

/// One live composite strategy.
///
/// Unbound until the first decision of a game, then bound to a single
/// candidate until [`Strategy::reset`]. Clones start unbound.
pub struct Composite {
    name: String,
    pool: Arc<Pool>,
    dice: Dice,
    binding: Binding,
}

impl Composite {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
    /// Name of the candidate this game is delegated to, if bound.
    pub fn bound(&self) -> Option<&str> {
        self.binding.name()
    }
    pub fn binding(&self) -> &Binding {
        &self.binding
    }
    /// Fresh candidate drawn from the pool for a new game.
    fn draw(&self) -> (String, Box<dyn Strategy>) {
        let chosen = self.pool.choose(&self.dice);
        log::debug!("[composite] {} binds {}", self.name, chosen.name());
        (chosen.name().to_string(), chosen.spawn(&self.dice))
    }
}

impl Strategy for Composite {
    fn decide(&mut self, me: &History, opponent: &History) -> anyhow::Result<Action> {
        let (name, mut strategy) = match std::mem::take(&mut self.binding) {
            Binding::Bound { name, strategy } => (name, strategy),
            Binding::Unbound => self.draw(),
        };
        let action = strategy.decide(me, opponent);
        self.binding = Binding::Bound { name, strategy };
        action
    }
    fn reset(&mut self) {
        if let Some(name) = self.binding.name() {
            log::debug!("[composite] {} releases {}", self.name, name);
        }
        self.binding = Binding::Unbound;
    }
}

impl Clone for Composite {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            pool: Arc::clone(&self.pool),
            dice: self.dice.clone(),
            binding: Binding::Unbound,
        }
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composite")
            .field("name", &self.name)
            .field("binding", &self.binding)
            .finish()
    }
}

/// The three composite types built from one registry.
#[derive(Debug, Clone)]
pub struct Ensembles {
    pub aggressive: Ensemble,
    pub cooperative: Ensemble,
    pub neutral: Ensemble,
}

impl Ensembles {
    pub fn get(&self, attitude: Attitude) -> &Ensemble {
        match attitude {
            Attitude::Aggressive => &self.aggressive,
            Attitude::Cooperative => &self.cooperative,
            Attitude::Neutral => &self.neutral,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &Ensemble> {
        [&self.aggressive, &self.cooperative, &self.neutral].into_iter()
    }
    /// All three composite types as descriptors.
    pub fn registry(&self) -> Registry {
        self.iter().map(Ensemble::descriptor).collect()
    }
}

impl std::fmt::Display for Ensembles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .iter()
            .map(|e| format!("{}({})", e.name(), e.pool().len()))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(", "))
    }
}

/// Build one composite type per attitude from `registry`.
///
/// Each pool holds the descriptors of its attitude whose names end with
/// `suffix`. Every pool is validated here, so an empty one surfaces as
/// [`Error::EmptyPool`] during setup rather than mid-tournament.
pub fn build(registry: &Registry, suffix: &str, dice: &Dice) -> Result<Ensembles, Error> {
    Ok(Ensembles {
        aggressive: Ensemble::new(registry, Attitude::Aggressive, suffix, dice)?,
        cooperative: Ensemble::new(registry, Attitude::Cooperative, suffix, dice)?,
        neutral: Ensemble::new(registry, Attitude::Neutral, suffix, dice)?,
    })
}
