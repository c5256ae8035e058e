//! The vanilla option contract.
//!
//! [`VanillaOption`] is an immutable, validated value. Every field is fixed
//! at construction; sensitivities are computed on fresh copies built with the
//! `with_*` constructors, so a caller's option can never be changed by a
//! pricer or by the Greek estimator.

use crate::exercise::ExerciseType;
use crate::instrument::PricingEngine;
use crate::payoff::{OptionType, Payoff, PlainVanillaPayoff};
use ao_core::{
    errors::{Error, Result},
    Price, Rate, Real, Time, Volatility,
};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// OptionDescription
// ────────────────────────────────────────────────────────────────────────────

/// Read-only snapshot of every field of a [`VanillaOption`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionDescription {
    /// Spot price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Time to maturity in years.
    pub maturity: Time,
    /// Continuously-compounded risk-free rate.
    pub rate: Rate,
    /// Annualised volatility.
    pub volatility: Volatility,
    /// Call or put.
    pub option_type: OptionType,
    /// American or European.
    pub exercise: ExerciseType,
}

// ────────────────────────────────────────────────────────────────────────────
// VanillaOption
// ────────────────────────────────────────────────────────────────────────────

/// A plain vanilla option on a single non-dividend-paying asset.
///
/// Invariants, checked by every constructor:
///
/// * all numeric fields are finite;
/// * spot, strike, maturity and volatility are non-negative;
/// * maturity is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "OptionDescription", into = "OptionDescription")
)]
pub struct VanillaOption {
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    option_type: OptionType,
    exercise: ExerciseType,
}

impl VanillaOption {
    /// Create a validated option.
    ///
    /// # Errors
    /// Returns a construction error when any invariant is violated; nothing
    /// is coerced.
    pub fn new(
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        volatility: Volatility,
        option_type: OptionType,
        exercise: ExerciseType,
    ) -> Result<Self> {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            option_type,
            exercise,
        }
        .validated()
    }

    /// Create an option from textual kind and style names, e.g.
    /// `("put", "american")`. Names are case-insensitive.
    pub fn from_names(
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        volatility: Volatility,
        option_type: &str,
        exercise: &str,
    ) -> Result<Self> {
        Self::new(
            spot,
            strike,
            maturity,
            rate,
            volatility,
            option_type.parse()?,
            exercise.parse()?,
        )
    }

    fn validated(self) -> Result<Self> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("rate", self.rate),
            ("volatility", self.volatility),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::NonFinite { name, value });
            }
        }
        for (name, value) in fields {
            if name != "rate" && value < 0.0 {
                return Err(Error::NegativeParameter { name, value });
            }
        }
        if self.maturity == 0.0 {
            return Err(Error::ZeroMaturity);
        }
        Ok(self)
    }

    // ── Copy-with-one-field-replaced ─────────────────────────────────────

    /// A new option identical to `self` but with a different spot.
    pub fn with_spot(&self, spot: Real) -> Result<Self> {
        Self { spot, ..*self }.validated()
    }

    /// A new option identical to `self` but with a different strike.
    pub fn with_strike(&self, strike: Real) -> Result<Self> {
        Self { strike, ..*self }.validated()
    }

    /// A new option identical to `self` but with a different maturity.
    pub fn with_maturity(&self, maturity: Time) -> Result<Self> {
        Self { maturity, ..*self }.validated()
    }

    /// A new option identical to `self` but with a different rate.
    pub fn with_rate(&self, rate: Rate) -> Result<Self> {
        Self { rate, ..*self }.validated()
    }

    /// A new option identical to `self` but with a different volatility.
    pub fn with_volatility(&self, volatility: Volatility) -> Result<Self> {
        Self { volatility, ..*self }.validated()
    }

    /// A new option identical to `self` but with a different exercise style.
    pub fn with_exercise(&self, exercise: ExerciseType) -> Self {
        Self { exercise, ..*self }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Spot price of the underlying.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Strike price.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Continuously-compounded risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Annualised volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// American or European.
    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Whether the holder may exercise before maturity.
    pub fn is_american(&self) -> bool {
        self.exercise.allows_early_exercise()
    }

    /// The exercise payoff.
    pub fn payoff(&self) -> PlainVanillaPayoff {
        PlainVanillaPayoff::new(self.option_type, self.strike)
    }

    /// Immediate-exercise value at asset level `price`.
    #[inline]
    pub fn intrinsic(&self, price: Real) -> Real {
        self.payoff().value(price)
    }

    /// Immediate-exercise value at the current spot.
    pub fn intrinsic_value(&self) -> Real {
        self.intrinsic(self.spot)
    }

    /// Field snapshot.
    pub fn describe(&self) -> OptionDescription {
        OptionDescription {
            spot: self.spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility: self.volatility,
            option_type: self.option_type,
            exercise: self.exercise,
        }
    }

    /// Price this option with `engine` at `resolution`.
    pub fn npv<E: PricingEngine + ?Sized>(
        &self,
        engine: &E,
        resolution: &E::Resolution,
    ) -> Result<Price> {
        engine.price(self, resolution)
    }
}

impl TryFrom<OptionDescription> for VanillaOption {
    type Error = Error;

    fn try_from(d: OptionDescription) -> Result<Self> {
        Self::new(
            d.spot,
            d.strike,
            d.maturity,
            d.rate,
            d.volatility,
            d.option_type,
            d.exercise,
        )
    }
}

impl From<VanillaOption> for OptionDescription {
    fn from(option: VanillaOption) -> Self {
        option.describe()
    }
}

impl fmt::Display for VanillaOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | S={}, K={}, T={}, r={}, sigma={}",
            self.option_type,
            self.exercise,
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility
        )
    }
}
