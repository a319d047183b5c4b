use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

/// Externally produced best-to-worst orderings of strategy names,
/// at most one table per attitude.
///
/// This crate never computes rank; it only slices what it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranks(BTreeMap<Attitude, Vec<String>>);

impl Ranks {
    /// Read rank tables shipped separately from a module,
    /// shaped like a module's `ranks` object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
    /// Attach or replace the table for `attitude`.
    pub fn with<I, S>(mut self, attitude: Attitude, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(attitude, names.into_iter().map(Into::into).collect());
        self
    }
    /// Table for `attitude`, best first.
    pub fn table(&self, attitude: Attitude) -> Result<&[String], Error> {
        self.0
            .get(&attitude)
            .map(Vec::as_slice)
            .ok_or(Error::MissingRankTable { attitude })
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Narrow `registry` to the strategies ranked inside `window`.
///
/// The full window returns the registry unchanged without consulting any
/// table. Any other window slices all three attitude tables, unions the
/// slices, and keeps the registered descriptors named in that union.
pub fn filter(registry: &Registry, ranks: &Ranks, window: Window) -> Result<Registry, Error> {
    if window.is_full() {
        log::debug!("[filter] full window, keeping all {}", registry.len());
        return Ok(registry.clone());
    }
    let mut keep = BTreeSet::new();
    for attitude in Attitude::all() {
        let table = ranks.table(attitude)?;
        let slice = window.slice(table.len());
        log::debug!(
            "[filter] {} ranks {}..{} of {}",
            attitude,
            slice.start,
            slice.end,
            table.len()
        );
        keep.extend(table[slice].iter().map(String::as_str));
    }
    for name in keep.iter().filter(|name| !registry.contains(name)) {
        log::debug!("[filter] ranked {} was not discovered", name);
    }
    let filtered = registry.retain(|name| keep.contains(name));
    log::info!(
        "[filter] window {} kept {} of {} strategies",
        window,
        filtered.len(),
        registry.len()
    );
    Ok(filtered)
}
