//! Option payoffs.
//!
//! Payoffs describe the exercise value of an option as a function of the
//! underlying asset price.

use ao_core::{errors::Error, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    #[default]
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Case-insensitive: `"call"`, `"Call"`, `"PUT"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(Error::InvalidOptionType(s.to_string())),
        }
    }
}

/// Base trait for option payoffs.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at exercise/expiry.
    fn value(&self, price: Real) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

/// Standard "plain vanilla" option payoff.
///
/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    #[inline]
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_payoffs() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        assert_eq!(call.value(120.0), 20.0);
        assert_eq!(call.value(80.0), 0.0);
        assert_eq!(put.value(80.0), 20.0);
        assert_eq!(put.value(120.0), 0.0);
        assert_eq!(call.description(), "Vanilla Call @ 100");
    }

    #[test]
    fn option_type_parses_case_insensitively() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!("PUT".parse::<OptionType>(), Ok(OptionType::Put));
        assert_eq!(" Put ".parse::<OptionType>(), Ok(OptionType::Put));
    }

    #[test]
    fn unknown_option_type_is_rejected() {
        assert_eq!(
            "straddle".parse::<OptionType>(),
            Err(Error::InvalidOptionType("straddle".into()))
        );
    }

    #[test]
    fn default_is_put() {
        assert_eq!(OptionType::default(), OptionType::Put);
    }
}
