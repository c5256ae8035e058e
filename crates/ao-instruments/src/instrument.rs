//! The pricing capability shared by every valuation method.

use crate::option::VanillaOption;
use ao_core::{errors::Result, Price};

/// Base trait for all pricing engines.
///
/// An engine turns a [`VanillaOption`] and a method-specific `Resolution`
/// (tree steps, grid size, Monte Carlo settings, …) into a scalar price.
/// Implementations are pure: the same inputs always give the same output and
/// no state survives a call, so one engine value may be shared freely across
/// threads.
///
/// Consumers that only need "a price for this option", such as the Greek
/// estimator, are written against this trait and never see the numerics
/// behind it.
pub trait PricingEngine: std::fmt::Debug + Send + Sync {
    /// Method-specific discretisation parameters.
    type Resolution: std::fmt::Debug + Clone;

    /// Short, stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// The resolution this engine uses when the caller has no preference.
    fn default_resolution(&self) -> Self::Resolution;

    /// Price `option` at the given resolution.
    fn price(&self, option: &VanillaOption, resolution: &Self::Resolution) -> Result<Price>;
}
