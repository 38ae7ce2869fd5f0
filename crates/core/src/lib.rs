//! Waybill
//!
//! Waybill is a deterministic delivery fee and lead-time engine: it validates a delivery
//! request, prices it against a zone's fee schedule and estimates how many days the delivery
//! will take.

pub mod fees;
pub mod lead_time;
pub mod policy;
pub mod quote;
pub mod request;
pub mod zones;

pub mod prelude;
