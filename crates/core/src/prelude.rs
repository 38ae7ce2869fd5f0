//! Prelude

pub use crate::{
    fees::{FeeAllowance, FeeBreakdown, FeeSchedule, FeeScheduleError},
    lead_time::LeadTimePolicy,
    policy::{DeliveryPolicy, PolicyError},
    quote::{DeliveryCalculation, QuoteError},
    request::{DeliveryRequest, InvalidRequest},
    zones::{DeliveryCost, DeliveryZone, ZoneLocation},
};
