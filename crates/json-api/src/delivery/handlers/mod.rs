//! Delivery Handlers

pub(crate) mod calculate;
pub(crate) mod cities;
pub(crate) mod communes;
pub(crate) mod regions;
pub(crate) mod zones;
