use crate::players::*;
use crate::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Compile-time registry of behaviors that module members can extend.
///
/// Every catalog entry descends from [`BASE`] directly. Discovery resolves a
/// member's ancestry to the first catalog entry it reaches and borrows that
/// entry's constructor.
#[derive(Clone)]
pub struct Catalog(BTreeMap<String, Spawn>);

impl Catalog {
    /// Catalog without any behaviors.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    /// Add or replace a behavior under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, spawn: F)
    where
        F: Fn(&Dice) -> Box<dyn Strategy> + Send + Sync + 'static,
    {
        let name = name.into();
        debug_assert!(name != BASE, "the base type has no behavior");
        self.0.insert(name, Arc::new(spawn));
    }
    pub fn get(&self, name: &str) -> Option<&Spawn> {
        self.0.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.register("Cooperator", |_| Box::new(Cooperator));
        catalog.register("Defector", |_| Box::new(Defector));
        catalog.register("TitForTat", |_| Box::new(TitForTat));
        catalog.register("TitForTwoTats", |_| Box::new(TitForTwoTats));
        catalog.register("Grudger", |_| Box::new(Grudger::default()));
        catalog.register("Pavlov", |_| Box::new(Pavlov));
        catalog.register("Alternator", |_| Box::new(Alternator));
        catalog.register("GenerousTitForTat", |dice| {
            Box::new(GenerousTitForTat::new(dice.clone(), FORGIVENESS))
        });
        catalog.register("Random", |dice| Box::new(Fish::new(dice.clone())));
        catalog
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.keys()).finish()
    }
}
