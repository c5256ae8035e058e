//! # ao-instruments
//!
//! The vanilla option contract priced by every engine in the workspace,
//! together with its payoff, its exercise style, and the `PricingEngine`
//! capability the engines implement.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::ExerciseType;
pub use instrument::PricingEngine;
pub use option::{OptionDescription, VanillaOption};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
