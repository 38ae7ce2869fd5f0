//! Delivery Policy
//!
//! Business policy that is not specific to a single zone: the free weight and distance
//! allowance and the lead-time tables. The defaults match the platform's launch market; a
//! YAML document can override any part of it.
//!
//! ```yaml
//! allowance:
//!   free_weight: 1
//!   free_distance: 5
//! lead_time:
//!   fast_path_days: 1
//!   fast_path_cities: [Douala, Yaoundé]
//!   region_days:
//!     Centre: 2
//!   default_days: 3
//! ```

use std::{fs, io, path::Path};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{fees::FeeAllowance, lead_time::LeadTimePolicy};

/// Errors raised while loading a delivery policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The policy file could not be read.
    #[error("failed to read delivery policy: {0}")]
    Io(#[from] io::Error),

    /// The policy document is not valid YAML for a policy.
    #[error("failed to parse delivery policy: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// An allowance threshold is negative.
    #[error("{0} allowance cannot be negative")]
    NegativeAllowance(&'static str),
}

/// Global delivery policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryPolicy {
    /// Weight and distance carried for free.
    pub allowance: FeeAllowance,

    /// Lead-time tables.
    pub lead_time: LeadTimePolicy,
}

impl DeliveryPolicy {
    /// Parse a policy from a YAML document. Missing sections keep their defaults.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::Yaml`]: the document could not be parsed.
    /// - [`PolicyError::NegativeAllowance`]: a free threshold is below zero.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_norway::from_str(yaml)?;

        if policy.allowance.free_weight < Decimal::ZERO {
            return Err(PolicyError::NegativeAllowance("weight"));
        }

        if policy.allowance.free_distance < Decimal::ZERO {
            return Err(PolicyError::NegativeAllowance("distance"));
        }

        Ok(policy)
    }

    /// Read and parse a policy file.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Io`] when the file cannot be read, otherwise the errors of
    /// [`DeliveryPolicy::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }
}
