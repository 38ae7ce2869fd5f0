//! Delivery Quotes

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    policy::DeliveryPolicy,
    request::DeliveryRequest,
    zones::{DeliveryCost, DeliveryZone},
};

/// Reasons a resolved zone cannot be quoted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// The zone exists but is disabled.
    #[error("delivery zone is inactive")]
    ZoneInactive,

    /// The zone has no active fee schedule.
    #[error("delivery pricing is not configured for this zone")]
    PricingNotConfigured,
}

/// A priced delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCalculation<Id> {
    /// Zone the delivery was priced against.
    pub zone_id: Id,

    /// Zone region.
    pub region: String,

    /// Zone city.
    pub city: String,

    /// Zone commune, `None` for a city-wide zone.
    pub commune: Option<String>,

    /// Flat charge from the zone's schedule.
    pub base_fee: Decimal,

    /// Weight surcharge, unrounded.
    pub weight_fee: Decimal,

    /// Distance surcharge, unrounded.
    pub distance_fee: Decimal,

    /// Clamped and rounded total.
    pub total_fee: Decimal,

    /// Estimated delivery days.
    pub estimated_days: u32,
}

impl DeliveryPolicy {
    /// Price a request against an already resolved zone and its cost.
    ///
    /// Checks run in order: zone active, cost present, cost active. The request is assumed to
    /// have passed [`DeliveryRequest::validate`].
    ///
    /// # Errors
    ///
    /// - [`QuoteError::ZoneInactive`]: the zone is disabled.
    /// - [`QuoteError::PricingNotConfigured`]: the cost is missing or disabled.
    pub fn quote<Id: Clone>(
        &self,
        request: &DeliveryRequest,
        zone: &DeliveryZone<Id>,
        cost: Option<&DeliveryCost>,
    ) -> Result<DeliveryCalculation<Id>, QuoteError> {
        if !zone.is_active {
            return Err(QuoteError::ZoneInactive);
        }

        let cost = cost
            .filter(|cost| cost.is_active)
            .ok_or(QuoteError::PricingNotConfigured)?;

        let fees = cost
            .schedule
            .price(&self.allowance, request.weight, request.distance);

        let location = &zone.location;

        Ok(DeliveryCalculation {
            zone_id: zone.id.clone(),
            region: location.region.clone(),
            city: location.city.clone(),
            commune: location.commune.clone(),
            base_fee: fees.base_fee,
            weight_fee: fees.weight_fee,
            distance_fee: fees.distance_fee,
            total_fee: fees.total_fee,
            estimated_days: self.lead_time.estimate(&location.region, &location.city),
        })
    }
}
