//! Delivery Repositories

mod costs;
mod geography;
mod zones;

pub(crate) use costs::PgDeliveryCostsRepository;
pub(crate) use geography::PgGeographyRepository;
pub(crate) use zones::PgDeliveryZonesRepository;
