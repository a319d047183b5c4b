use crate::*;
use std::collections::BTreeMap;

/// Name-ordered set of strategy descriptors.
///
/// Produced by discovery, narrowed by rank filtering, and consumed by the
/// composite factory. Descriptors may also self-register directly, which is
/// how strategies compiled into the host join without a module file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry(BTreeMap<String, Descriptor>);

impl Registry {
    /// Insert a descriptor, replacing any previous one with the same name.
    pub fn register(&mut self, descriptor: Descriptor) -> Option<Descriptor> {
        self.0.insert(descriptor.name().to_string(), descriptor)
    }
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.0.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.0.values()
    }
    /// Descriptors classified under `attitude`, in name order.
    pub fn attitude(&self, attitude: Attitude) -> impl Iterator<Item = &Descriptor> {
        self.iter().filter(move |d| d.attitude() == Some(attitude))
    }
    /// Descriptors without an attitude. Discoverable but never pooled.
    pub fn unclassified(&self) -> impl Iterator<Item = &Descriptor> {
        self.iter().filter(|d| d.attitude().is_none())
    }
    /// Keep only descriptors whose names satisfy `keep`.
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        self.iter()
            .filter(|d| keep(d.name()))
            .cloned()
            .collect()
    }
    /// Treat an empty registry as fatal for callers that need strategies.
    pub fn require(self, key: &str) -> Result<Self, Error> {
        if self.is_empty() {
            Err(Error::EmptyDiscovery {
                key: key.to_string(),
            })
        } else {
            Ok(self)
        }
    }
}

impl FromIterator<Descriptor> for Registry {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Descriptor>,
    {
        let mut registry = Self::default();
        for descriptor in iter {
            registry.register(descriptor);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Descriptor;
    type IntoIter = std::collections::btree_map::Values<'a, String, Descriptor>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}
