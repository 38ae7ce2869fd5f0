//! Calculate Delivery Fee Handler

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use waybill::request::DeliveryRequest;
use waybill_app::domain::delivery::ZoneCalculation;

use crate::{
    delivery::errors::{into_status_error, quote_outcome},
    extensions::*,
    observability::{QuoteOutcome, record_quote},
};

/// Calculate Delivery Fee Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculateDeliveryRequest {
    /// Destination region
    #[serde(default)]
    pub region: String,

    /// Destination city
    #[serde(default)]
    pub city: String,

    /// Destination commune; the city-wide zone is used when omitted
    #[serde(default)]
    pub commune: Option<String>,

    /// Parcel weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,

    /// Travel distance in kilometres
    #[serde(default)]
    pub distance: Option<f64>,
}

impl From<CalculateDeliveryRequest> for DeliveryRequest {
    fn from(request: CalculateDeliveryRequest) -> Self {
        Self {
            region: request.region,
            city: request.city,
            commune: request.commune,
            weight: request.weight.map(saturating_decimal),
            distance: request.distance.map(saturating_decimal),
        }
    }
}

/// Values beyond the `Decimal` range keep their sign and saturate at its bounds.
fn saturating_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Delivery Calculation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeliveryCalculationResponse {
    /// Zone the delivery was priced against
    pub zone_id: Uuid,
    pub region: String,
    pub city: String,
    pub commune: Option<String>,
    pub base_fee: f64,
    /// Weight surcharge, unrounded
    pub weight_fee: f64,
    /// Distance surcharge, unrounded
    pub distance_fee: f64,
    /// Total fee after bounds and rounding
    pub total_fee: f64,
    pub estimated_days: u32,
}

impl TryFrom<ZoneCalculation> for DeliveryCalculationResponse {
    type Error = StatusError;

    fn try_from(calculation: ZoneCalculation) -> Result<Self, Self::Error> {
        Ok(Self {
            zone_id: calculation.zone_id.into_uuid(),
            base_fee: amount(calculation.base_fee)?,
            weight_fee: amount(calculation.weight_fee)?,
            distance_fee: amount(calculation.distance_fee)?,
            total_fee: amount(calculation.total_fee)?,
            estimated_days: calculation.estimated_days,
            region: calculation.region,
            city: calculation.city,
            commune: calculation.commune,
        })
    }
}

fn amount(value: Decimal) -> Result<f64, StatusError> {
    value.to_f64().ok_or_else(|| {
        error!("fee {value} cannot be represented as a JSON number");

        StatusError::internal_server_error()
    })
}

/// Calculate Delivery Fee Handler
///
/// Resolves the destination zone and prices the delivery.
#[endpoint(
    tags("delivery"),
    summary = "Calculate Delivery Fee",
    responses(
        (status_code = StatusCode::OK, description = "Delivery priced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request"),
        (status_code = StatusCode::NOT_FOUND, description = "No delivery zone for the destination"),
        (status_code = StatusCode::CONFLICT, description = "Delivery zone is inactive"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Delivery pricing is not configured"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CalculateDeliveryRequest>,
    depot: &mut Depot,
) -> Result<Json<DeliveryCalculationResponse>, StatusError> {
    let delivery = depot.delivery_or_500()?;

    match delivery.calculate_fee(json.into_inner().into()).await {
        Ok(calculation) => {
            record_quote(QuoteOutcome::Priced);

            Ok(Json(calculation.try_into()?))
        }
        Err(error) => {
            record_quote(quote_outcome(&error));

            Err(into_status_error(error))
        }
    }
}
