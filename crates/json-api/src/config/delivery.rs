//! Delivery Policy Config

use std::path::PathBuf;

use clap::Args;
use waybill::policy::{DeliveryPolicy, PolicyError};

/// Delivery pricing policy settings.
#[derive(Debug, Args)]
pub struct DeliveryConfig {
    /// YAML file overriding the free allowance and lead-time tables
    #[arg(long, env = "DELIVERY_POLICY_PATH")]
    pub delivery_policy: Option<PathBuf>,
}

impl DeliveryConfig {
    /// Load the configured policy, or the built-in one when no file is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy file cannot be read or parsed.
    pub fn load_policy(&self) -> Result<DeliveryPolicy, PolicyError> {
        self.delivery_policy
            .as_deref()
            .map_or_else(|| Ok(DeliveryPolicy::default()), DeliveryPolicy::from_path)
    }
}
