//! Regions Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{delivery::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegionsResponse {
    /// Region names, sorted
    pub regions: Vec<String>,
}

/// Regions Index Handler
///
/// Returns the regions that have at least one delivery zone.
#[endpoint(tags("delivery"), summary = "List Regions")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RegionsResponse>, StatusError> {
    let regions = depot
        .delivery_or_500()?
        .list_regions()
        .await
        .map_err(into_status_error)?;

    Ok(Json(RegionsResponse { regions }))
}
