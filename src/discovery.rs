//! Strategy discovery over a loaded module.
//!
//! A member is a strategy when its ancestry reaches [`BASE`]. Ancestry is
//! resolved through the module's own members first, so a member may shadow a
//! catalog behavior of the same name, and then through the catalog, whose
//! behaviors all descend from the base directly. Attitude is inherited the
//! same way: the nearest declared attitude along the chain wins.
use crate::*;
use std::collections::BTreeSet;

/// Where a member's ancestry walk ended up.
enum Lineage {
    /// Reaches the base through a catalog behavior, or directly if `None`.
    Strategy {
        attitude: Option<Attitude>,
        behavior: Option<Spawn>,
    },
    /// Does not reach the base; the reason is logged.
    Other(String),
}

/// Find every strategy defined in or imported into `module`.
///
/// Zero strategies is a valid result; see [`Registry::require`] for callers
/// that treat it as fatal.
pub fn discover(module: &Module, catalog: &Catalog) -> Registry {
    let mut registry = Registry::default();
    for member in module.members() {
        if member.name == BASE {
            continue;
        }
        match lineage(module, catalog, member) {
            Lineage::Strategy { attitude, behavior } => {
                registry.register(descriptor(&member.name, attitude, behavior));
            }
            Lineage::Other(reason) => {
                log::debug!("[discover] {}: skipping {} ({})", module.key(), member.name, reason);
            }
        }
    }
    for name in module.imports().filter(|name| *name != BASE) {
        match catalog.get(name) {
            Some(spawn) => {
                registry.register(descriptor(name, None, Some(spawn.clone())));
            }
            None => log::warn!("[discover] {}: unknown import {}", module.key(), name),
        }
    }
    log::info!(
        "[discover] {}: {} strategies ({} unclassified)",
        module.key(),
        registry.len(),
        registry.unclassified().count()
    );
    registry
}

fn lineage(module: &Module, catalog: &Catalog, member: &Member) -> Lineage {
    let mut seen = BTreeSet::new();
    let mut attitude = None;
    let mut current = member;
    loop {
        if !seen.insert(current.name.as_str()) {
            return Lineage::Other(format!("cyclic ancestry through {}", current.name));
        }
        attitude = attitude.or(current.attitude);
        let Some(parent) = current.extends.as_deref() else {
            return Lineage::Other(format!("{} has no parent", current.name));
        };
        if parent == BASE {
            return Lineage::Strategy {
                attitude,
                behavior: None,
            };
        }
        if let Some(next) = module.member(parent) {
            current = next;
            continue;
        }
        if let Some(spawn) = catalog.get(parent) {
            return Lineage::Strategy {
                attitude,
                behavior: Some(spawn.clone()),
            };
        }
        log::warn!(
            "[discover] {}: {} extends unknown {}",
            module.key(),
            current.name,
            parent
        );
        return Lineage::Other(format!("unknown ancestor {}", parent));
    }
}

fn descriptor(name: &str, attitude: Option<Attitude>, behavior: Option<Spawn>) -> Descriptor {
    match behavior {
        Some(spawn) => Descriptor::new(name, attitude, move |dice| spawn(dice)),
        None => {
            let name = name.to_string();
            Descriptor::new(name.clone(), attitude, move |_| Box::new(Abstract(name.clone())))
        }
    }
}
