//! Delivery Requests

use rust_decimal::Decimal;
use thiserror::Error;

use crate::zones::ZoneLocation;

/// Reasons a delivery request is rejected before any zone lookup happens.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    /// The region was empty or whitespace.
    #[error("region required")]
    RegionRequired,

    /// The city was empty or whitespace.
    #[error("city required")]
    CityRequired,

    /// A weight below zero was supplied.
    #[error("weight cannot be negative")]
    NegativeWeight,

    /// A distance below zero was supplied.
    #[error("distance cannot be negative")]
    NegativeDistance,
}

/// A request to price a single delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    /// Destination region name.
    pub region: String,

    /// Destination city name.
    pub city: String,

    /// Destination commune, when the delivery targets a commune-specific zone.
    pub commune: Option<String>,

    /// Parcel weight in kilograms.
    pub weight: Option<Decimal>,

    /// Travel distance in kilometres.
    pub distance: Option<Decimal>,
}

impl DeliveryRequest {
    /// Create a request for a whole-city destination with no weight or distance.
    pub fn new(region: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city: city.into(),
            commune: None,
            weight: None,
            distance: None,
        }
    }

    /// Target a specific commune.
    #[must_use]
    pub fn with_commune(mut self, commune: impl Into<String>) -> Self {
        self.commune = Some(commune.into());
        self
    }

    /// Set the parcel weight in kilograms.
    #[must_use]
    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the travel distance in kilometres.
    #[must_use]
    pub fn with_distance(mut self, distance: Decimal) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Check the request, stopping at the first violated rule.
    ///
    /// Rules are checked in order: region, city, weight, distance.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidRequest`] reason that applies.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.region.trim().is_empty() {
            return Err(InvalidRequest::RegionRequired);
        }

        if self.city.trim().is_empty() {
            return Err(InvalidRequest::CityRequired);
        }

        if self.weight.is_some_and(|weight| weight < Decimal::ZERO) {
            return Err(InvalidRequest::NegativeWeight);
        }

        if self.distance.is_some_and(|distance| distance < Decimal::ZERO) {
            return Err(InvalidRequest::NegativeDistance);
        }

        Ok(())
    }

    /// The destination this request resolves against.
    ///
    /// A blank commune is treated as omitted and addresses the city-wide zone.
    pub fn location(&self) -> ZoneLocation {
        ZoneLocation {
            region: self.region.clone(),
            city: self.city.clone(),
            commune: self
                .commune
                .clone()
                .filter(|commune| !commune.trim().is_empty()),
        }
    }
}
