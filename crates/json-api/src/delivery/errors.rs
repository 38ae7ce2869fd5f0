//! Delivery Errors

use salvo::http::StatusError;
use tracing::{debug, error, warn};

use waybill_app::domain::delivery::DeliveryServiceError;

use crate::observability::QuoteOutcome;

pub(crate) fn into_status_error(error: DeliveryServiceError) -> StatusError {
    let message = error.to_string();

    match error {
        DeliveryServiceError::InvalidRequest(_)
        | DeliveryServiceError::InvalidFeeSchedule(_) => {
            debug!("rejected delivery request: {message}");

            StatusError::bad_request().brief(message)
        }
        DeliveryServiceError::ZoneNotFound { .. } => {
            debug!("{message}");

            StatusError::not_found().brief(message)
        }
        DeliveryServiceError::NotFound => StatusError::not_found().brief(message),
        DeliveryServiceError::ZoneInactive { .. } => {
            warn!("{message}");

            StatusError::conflict().brief(message)
        }
        DeliveryServiceError::PricingNotConfigured { .. } => {
            warn!("{message}");

            StatusError::unprocessable_entity().brief(message)
        }
        DeliveryServiceError::AlreadyExists => StatusError::conflict().brief(message),
        DeliveryServiceError::InvalidReference
        | DeliveryServiceError::MissingRequiredData
        | DeliveryServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid delivery payload")
        }
        DeliveryServiceError::Sql(source) => {
            error!("delivery storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn quote_outcome(error: &DeliveryServiceError) -> QuoteOutcome {
    match error {
        DeliveryServiceError::InvalidRequest(_) => QuoteOutcome::InvalidRequest,
        DeliveryServiceError::ZoneNotFound { .. } => QuoteOutcome::ZoneNotFound,
        DeliveryServiceError::ZoneInactive { .. } => QuoteOutcome::ZoneInactive,
        DeliveryServiceError::PricingNotConfigured { .. } => QuoteOutcome::PricingNotConfigured,
        _ => QuoteOutcome::Failed,
    }
}
