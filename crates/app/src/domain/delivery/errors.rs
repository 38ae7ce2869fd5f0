//! Delivery service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;
use waybill::{fees::FeeScheduleError, request::InvalidRequest, zones::ZoneLocation};

use crate::domain::delivery::records::DeliveryZoneUuid;

#[derive(Debug, Error)]
pub enum DeliveryServiceError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("no delivery zone found for {location}")]
    ZoneNotFound { location: ZoneLocation },

    #[error("delivery zone {zone} is inactive")]
    ZoneInactive { zone: DeliveryZoneUuid },

    #[error("delivery pricing is not configured for zone {zone}")]
    PricingNotConfigured { zone: DeliveryZoneUuid },

    #[error("invalid fee schedule: {0}")]
    InvalidFeeSchedule(#[from] FeeScheduleError),

    #[error("delivery zone already exists")]
    AlreadyExists,

    #[error("delivery zone not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for DeliveryServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
