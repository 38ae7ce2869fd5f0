//! Waybill Domain Concerns

pub mod delivery;
