//! Communes Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{delivery::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommunesResponse {
    pub communes: Vec<String>,
}

/// Communes Index Handler
///
/// Returns the communes of a city that have a delivery zone of their own.
#[endpoint(tags("delivery"), summary = "List Communes")]
pub(crate) async fn handler(
    region: QueryParam<String, true>,
    city: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<CommunesResponse>, StatusError> {
    let communes = depot
        .delivery_or_500()?
        .list_communes_by_city(region.into_inner(), city.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CommunesResponse { communes }))
}
