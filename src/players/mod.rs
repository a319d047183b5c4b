//! Built-in behaviors for the strategy catalog.
//!
//! Classic iterated prisoner's dilemma strategies implementing [`Strategy`],
//! available to module members through [`Catalog::default`].
//!
//! ## Implementations
//!
//! - [`Cooperator`]: Always cooperates
//! - [`Defector`]: Always defects
//! - [`TitForTat`]: Opens nice, then mirrors the opponent
//! - [`TitForTwoTats`]: Retaliates only after two defections in a row
//! - [`GenerousTitForTat`]: Tit-for-tat that sometimes forgives
//! - [`Grudger`]: Cooperates until betrayed once, then never again
//! - [`Pavlov`]: Win-stay, lose-shift
//! - [`Alternator`]: Cooperates and defects in turn
//! - [`Fish`]: Fair coin flip every round
//!
//! [`Strategy`]: crate::Strategy
//! [`Catalog::default`]: crate::Catalog
mod alternator;
mod constant;
mod fish;
mod generous;
mod grudger;
mod pavlov;
mod tit_for_tat;

pub use alternator::*;
pub use constant::*;
pub use fish::*;
pub use generous::*;
pub use grudger::*;
pub use pavlov::*;
pub use tit_for_tat::*;
