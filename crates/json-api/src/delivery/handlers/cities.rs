//! Cities Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{delivery::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CitiesResponse {
    /// City names within the region, sorted
    pub cities: Vec<String>,
}

/// Cities Index Handler
///
/// Returns the cities of a region that have at least one delivery zone. An
/// unknown region yields an empty list.
#[endpoint(tags("delivery"), summary = "List Cities")]
pub(crate) async fn handler(
    region: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<CitiesResponse>, StatusError> {
    let cities = depot
        .delivery_or_500()?
        .list_cities_by_region(region.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CitiesResponse { cities }))
}
