use crate::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// One top-level definition in a strategy module.
///
/// `extends` names the parent: another member, a catalog behavior, or
/// [`BASE`]. A member without a parent is a plain helper, not a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub attitude: Option<Attitude>,
    #[serde(default)]
    pub description: Option<String>,
}

/// On-disk shape of a module file.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    members: Vec<Member>,
    #[serde(default)]
    ranks: Ranks,
}

/// A loaded strategy module: a fresh namespace of members, imported
/// catalog names, and whatever rank tables the file ships.
#[derive(Debug, Clone)]
pub struct Module {
    key: String,
    path: PathBuf,
    imports: BTreeSet<String>,
    members: BTreeMap<String, Member>,
    ranks: Ranks,
}

impl Module {
    /// Build a module from file contents. The namespace key is the file stem.
    pub fn parse(path: &Path, text: &str) -> Result<Self, Error> {
        let manifest = serde_json::from_str::<Manifest>(text).map_err(|source| {
            Error::InvalidModule {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let key = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut members = BTreeMap::new();
        for member in manifest.members {
            if let Some(previous) = members.insert(member.name.clone(), member) {
                log::warn!("[module] {} redefines {}", key, previous.name);
            }
        }
        Ok(Self {
            key,
            path: path.to_path_buf(),
            imports: manifest.imports.into_iter().collect(),
            members,
            ranks: manifest.ranks,
        })
    }
    /// Namespace key derived from the file's base name.
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Members defined by the module itself, in name order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }
    /// Catalog names imported into the namespace and not redefined by a member.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter(|name| !self.members.contains_key(*name))
            .map(String::as_str)
    }
    pub fn ranks(&self) -> &Ranks {
        &self.ranks
    }
}
