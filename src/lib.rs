//! Strategy loading and composition for iterated two-player games.
//!
//! A strategy module is a JSON manifest whose members declare their ancestry.
//! Loading and discovery turn it into a [`Registry`] of [`Descriptor`]s,
//! an optional rank [`Window`] narrows it using external [`Ranks`], and
//! [`build`] synthesizes one composite [`Ensemble`] per [`Attitude`]. Each
//! [`Composite`] instance binds to one random candidate per game and
//! delegates every decision of that game to it.
mod action;
mod attitude;
mod binding;
mod catalog;
mod composite;
mod config;
mod descriptor;
mod dice;
mod discovery;
mod error;
mod history;
mod loader;
mod module;
mod pool;
mod ranks;
mod registry;
mod strategy;
mod window;

pub mod players;

pub use action::*;
pub use attitude::*;
pub use binding::*;
pub use catalog::*;
pub use composite::*;
pub use config::*;
pub use descriptor::*;
pub use dice::*;
pub use discovery::*;
pub use error::*;
pub use history::*;
pub use loader::*;
pub use module::*;
pub use pool::*;
pub use ranks::*;
pub use registry::*;
pub use strategy::*;
pub use window::*;

/// Running payoff total of one side of a game.
pub type Score = i32;
/// Fractional position in a best-to-worst rank table.
pub type Quantile = f64;
/// Likelihood of a random event, used by stochastic behaviors.
pub type Probability = f64;

/// Name of the base type every strategy descends from.
pub const BASE: &str = "Strategy";
/// Extension appended to module paths that lack it.
pub const EXTENSION: &str = "json";
/// Chance that a generous tit-for-tat forgives a defection.
pub const FORGIVENESS: Probability = 0.1;

/// Run the whole pipeline: load, discover, filter, build.
///
/// An empty discovery is fatal here, since no composite could be built from it.
pub fn setup(config: &Config) -> Result<Ensembles, Error> {
    let module = load(&config.module)?;
    let registry = discover(&module, &Catalog::default()).require(module.key())?;
    let window = config.window()?;
    let ranks = match config.ranks.as_ref() {
        Some(path) => Ranks::load(path)?,
        None => module.ranks().clone(),
    };
    let registry = filter(&registry, &ranks, window)?;
    let dice = match config.seed {
        Some(seed) => Dice::seeded(seed),
        None => Dice::default(),
    };
    let ensembles = build(&registry, &config.suffix, &dice)?;
    log::info!(
        "[setup] {} ready: {} strategies across {}",
        module.key(),
        registry.len(),
        ensembles
    );
    Ok(ensembles)
}

/// Initialize terminal logging at the given level.
/// Repeated calls are ignored once a logger is installed.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::trace!("logger already initialized");
    }
}
