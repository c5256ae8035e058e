//! Option exercise styles.
//!
//! An `ExerciseType` defines *when* an option can be exercised.

use ao_core::errors::Error;
use std::fmt;
use std::str::FromStr;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseType {
    /// Can be exercised at any time up to expiry.
    #[default]
    American,
    /// Can only be exercised at expiry.
    European,
}

impl ExerciseType {
    /// Whether early exercise is allowed.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseType::American)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::American => write!(f, "American"),
            ExerciseType::European => write!(f, "European"),
        }
    }
}

impl FromStr for ExerciseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" => Ok(ExerciseType::American),
            "european" => Ok(ExerciseType::European),
            _ => Err(Error::InvalidExerciseType(s.to_string())),
        }
    }
}
