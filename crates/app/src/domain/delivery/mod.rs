//! Delivery Zones & Fees

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
mod resolver;
pub mod service;

pub use errors::DeliveryServiceError;
pub use service::*;
