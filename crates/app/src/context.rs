//! App Context

use std::sync::Arc;

use thiserror::Error;
use waybill::policy::DeliveryPolicy;

use crate::{
    database::{self, Db},
    domain::delivery::{DeliveryService, PgDeliveryService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub delivery: Arc<dyn DeliveryService>,
}

impl AppContext {
    /// Build application context from a database URL and the delivery policy to quote with.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        policy: DeliveryPolicy,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            delivery: Arc::new(PgDeliveryService::new(Db::new(pool), policy)),
        })
    }
}
