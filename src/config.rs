use crate::*;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

/// Everything [`setup`] needs to go from a module file to composite types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategy module path, extension optional.
    pub module: PathBuf,
    /// External rank tables; replaces the module's own when set.
    pub ranks: Option<PathBuf>,
    pub top: Quantile,
    pub bottom: Quantile,
    /// Name suffix selecting one generation of strategies.
    pub suffix: String,
    /// Seed for the simulation dice. Unseeded runs draw from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module: PathBuf::from("strategies"),
            ranks: None,
            top: 0.,
            bottom: 1.,
            suffix: String::new(),
            seed: None,
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing fields take their defaults.
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
    /// Defaults overridden by `STRATAGEM_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| std::env::var(key).ok())
    }
    /// Defaults overridden by whatever `var` returns for each `STRATAGEM_*` key.
    pub fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(module) = var("STRATAGEM_MODULE") {
            config.module = PathBuf::from(module);
        }
        if let Some(ranks) = var("STRATAGEM_RANKS") {
            config.ranks = Some(PathBuf::from(ranks));
        }
        if let Some(suffix) = var("STRATAGEM_SUFFIX") {
            config.suffix = suffix;
        }
        if let Some(top) = var("STRATAGEM_TOP") {
            config.top = parse("STRATAGEM_TOP", &top)?;
        }
        if let Some(bottom) = var("STRATAGEM_BOTTOM") {
            config.bottom = parse("STRATAGEM_BOTTOM", &bottom)?;
        }
        if let Some(seed) = var("STRATAGEM_SEED") {
            config.seed = Some(parse("STRATAGEM_SEED", &seed)?);
        }
        Ok(config)
    }
    /// Validated rank window.
    pub fn window(&self) -> Result<Window, Error> {
        Window::new(self.top, self.bottom)
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
{
    value.trim().parse::<T>().map_err(|_| Error::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}
