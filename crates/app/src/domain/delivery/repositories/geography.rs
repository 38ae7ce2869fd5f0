//! Geography Repository

use sqlx::{Postgres, Transaction, query_scalar};
use uuid::Uuid;

use crate::domain::delivery::records::{CityUuid, CommuneUuid, RegionUuid};

const FIND_REGION_SQL: &str = include_str!("../sql/find_region.sql");
const FIND_CITY_SQL: &str = include_str!("../sql/find_city.sql");
const FIND_COMMUNE_SQL: &str = include_str!("../sql/find_commune.sql");
const ENSURE_REGION_SQL: &str = include_str!("../sql/ensure_region.sql");
const ENSURE_CITY_SQL: &str = include_str!("../sql/ensure_city.sql");
const ENSURE_COMMUNE_SQL: &str = include_str!("../sql/ensure_commune.sql");
const LIST_REGIONS_SQL: &str = include_str!("../sql/list_regions.sql");
const LIST_CITIES_SQL: &str = include_str!("../sql/list_cities.sql");
const LIST_COMMUNES_SQL: &str = include_str!("../sql/list_communes.sql");

/// Regions, cities and communes, matched by exact name.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgGeographyRepository;

impl PgGeographyRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_region(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<RegionUuid>, sqlx::Error> {
        let uuid = query_scalar::<Postgres, Uuid>(FIND_REGION_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(uuid.map(RegionUuid::from_uuid))
    }

    pub(crate) async fn find_city(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        region: RegionUuid,
        name: &str,
    ) -> Result<Option<CityUuid>, sqlx::Error> {
        let uuid = query_scalar::<Postgres, Uuid>(FIND_CITY_SQL)
            .bind(region.into_uuid())
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(uuid.map(CityUuid::from_uuid))
    }

    pub(crate) async fn find_commune(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        city: CityUuid,
        name: &str,
    ) -> Result<Option<CommuneUuid>, sqlx::Error> {
        let uuid = query_scalar::<Postgres, Uuid>(FIND_COMMUNE_SQL)
            .bind(city.into_uuid())
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(uuid.map(CommuneUuid::from_uuid))
    }

    /// Returns the region with this name, creating it when missing.
    pub(crate) async fn ensure_region(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<RegionUuid, sqlx::Error> {
        let uuid = query_scalar::<Postgres, Uuid>(ENSURE_REGION_SQL)
            .bind(RegionUuid::new().into_uuid())
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

        Ok(RegionUuid::from_uuid(uuid))
    }

    pub(crate) async fn ensure_city(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        region: RegionUuid,
        name: &str,
    ) -> Result<CityUuid, sqlx::Error> {
        let uuid = query_scalar::<Postgres, Uuid>(ENSURE_CITY_SQL)
            .bind(CityUuid::new().into_uuid())
            .bind(region.into_uuid())
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

        Ok(CityUuid::from_uuid(uuid))
    }

    pub(crate) async fn ensure_commune(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        city: CityUuid,
        name: &str,
    ) -> Result<CommuneUuid, sqlx::Error> {
        let uuid = query_scalar::<Postgres, Uuid>(ENSURE_COMMUNE_SQL)
            .bind(CommuneUuid::new().into_uuid())
            .bind(city.into_uuid())
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

        Ok(CommuneUuid::from_uuid(uuid))
    }

    /// Regions with at least one zone, alphabetically.
    pub(crate) async fn find_available_regions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_REGIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Cities of `region` with at least one zone, alphabetically.
    pub(crate) async fn find_cities_by_region(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        region: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_CITIES_SQL)
            .bind(region)
            .fetch_all(&mut **tx)
            .await
    }

    /// Communes of `city` in `region` with a zone of their own, alphabetically.
    pub(crate) async fn find_communes_by_city(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        region: &str,
        city: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_COMMUNES_SQL)
            .bind(region)
            .bind(city)
            .fetch_all(&mut **tx)
            .await
    }
}
