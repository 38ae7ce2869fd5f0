//! Delivery Fees
//!
//! A zone's [`FeeSchedule`] prices a delivery as a flat base fee plus weight and distance
//! surcharges. The [`FeeAllowance`] decides how much weight and distance is carried for free
//! before the surcharges start. The summed fee is clamped to the schedule's bounds and rounded
//! to a whole currency unit.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a fee schedule is not fit to be stored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeeScheduleError {
    /// One of the amounts or rates is below zero.
    #[error("{field} cannot be negative")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The minimum fee is greater than the maximum fee.
    #[error("minimum fee {min_fee} exceeds maximum fee {max_fee}")]
    InvertedBounds {
        /// Configured minimum.
        min_fee: Decimal,

        /// Configured maximum.
        max_fee: Decimal,
    },
}

/// Pricing parameters for a delivery zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Flat charge applied to every delivery.
    pub base_fee: Decimal,

    /// Surcharge per kilogram above the free weight.
    pub weight_multiplier: Decimal,

    /// Surcharge per kilometre above the free distance.
    pub distance_multiplier: Decimal,

    /// Lower bound of the total fee.
    pub min_fee: Decimal,

    /// Upper bound of the total fee.
    pub max_fee: Decimal,
}

impl FeeSchedule {
    /// Check the schedule can be persisted.
    ///
    /// # Errors
    ///
    /// - [`FeeScheduleError::Negative`]: an amount or rate is below zero.
    /// - [`FeeScheduleError::InvertedBounds`]: `min_fee` is greater than `max_fee`.
    pub fn validate(&self) -> Result<(), FeeScheduleError> {
        let fields = [
            ("base fee", self.base_fee),
            ("weight multiplier", self.weight_multiplier),
            ("distance multiplier", self.distance_multiplier),
            ("minimum fee", self.min_fee),
            ("maximum fee", self.max_fee),
        ];

        if let Some((field, _)) = fields.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(FeeScheduleError::Negative { field });
        }

        if self.min_fee > self.max_fee {
            return Err(FeeScheduleError::InvertedBounds {
                min_fee: self.min_fee,
                max_fee: self.max_fee,
            });
        }

        Ok(())
    }

    /// Price a delivery.
    ///
    /// Missing weight or distance counts as zero. The bounds are applied to the sum of the
    /// components as `max(min_fee, min(max_fee, sum))`, so a schedule whose minimum exceeds
    /// its maximum always yields the minimum.
    pub fn price(
        &self,
        allowance: &FeeAllowance,
        weight: Option<Decimal>,
        distance: Option<Decimal>,
    ) -> FeeBreakdown {
        let weight_fee = surcharge(
            weight.unwrap_or_default(),
            allowance.free_weight,
            self.weight_multiplier,
        );

        let distance_fee = surcharge(
            distance.unwrap_or_default(),
            allowance.free_distance,
            self.distance_multiplier,
        );

        let sum = self
            .base_fee
            .saturating_add(weight_fee)
            .saturating_add(distance_fee);

        let total_fee = self
            .min_fee
            .max(self.max_fee.min(sum))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        FeeBreakdown {
            base_fee: self.base_fee,
            weight_fee,
            distance_fee,
            total_fee,
        }
    }
}

fn surcharge(amount: Decimal, free: Decimal, rate: Decimal) -> Decimal {
    amount
        .saturating_sub(free)
        .max(Decimal::ZERO)
        .saturating_mul(rate)
}

/// Weight and distance carried without surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeAllowance {
    /// Kilograms carried for free.
    pub free_weight: Decimal,

    /// Kilometres travelled for free.
    pub free_distance: Decimal,
}

impl Default for FeeAllowance {
    fn default() -> Self {
        Self {
            free_weight: Decimal::ONE,
            free_distance: Decimal::from(5),
        }
    }
}

/// Result of pricing a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    /// Flat charge from the schedule.
    pub base_fee: Decimal,

    /// Weight surcharge, unrounded.
    pub weight_fee: Decimal,

    /// Distance surcharge, unrounded.
    pub distance_fee: Decimal,

    /// Clamped total, rounded to a whole unit.
    pub total_fee: Decimal,
}
