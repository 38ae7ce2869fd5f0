//! App Router

use salvo::Router;

use crate::delivery;

pub fn app_router() -> Router {
    Router::with_path("delivery")
        .push(Router::with_path("calculate").post(delivery::calculate::handler))
        .push(Router::with_path("zones").get(delivery::zones::handler))
        .push(Router::with_path("regions").get(delivery::regions::handler))
        .push(Router::with_path("cities").get(delivery::cities::handler))
        .push(Router::with_path("communes").get(delivery::communes::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use waybill_app::domain::delivery::MockDeliveryService;

    use crate::{
        delivery::regions::RegionsResponse,
        test_helpers::{delivery_service, forbid_admin_calls},
    };

    use super::*;

    #[tokio::test]
    async fn test_router_mounts_delivery_routes() -> TestResult {
        let mut delivery = MockDeliveryService::new();

        delivery
            .expect_list_regions()
            .once()
            .return_once(|| Ok(vec!["Nord".to_string()]));

        delivery.expect_calculate_fee().never();
        delivery.expect_list_zones().never();
        delivery.expect_list_cities_by_region().never();
        delivery.expect_list_communes_by_city().never();
        forbid_admin_calls(&mut delivery);

        let response: RegionsResponse = TestClient::get("http://example.com/delivery/regions")
            .send(&delivery_service(delivery, app_router()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.regions, ["Nord"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_router_has_no_zone_admin_routes() {
        let mut delivery = MockDeliveryService::new();

        delivery.expect_calculate_fee().never();
        delivery.expect_list_zones().never();
        delivery.expect_list_regions().never();
        delivery.expect_list_cities_by_region().never();
        delivery.expect_list_communes_by_city().never();
        forbid_admin_calls(&mut delivery);

        let res = TestClient::post("http://example.com/delivery/zones")
            .send(&delivery_service(delivery, app_router()))
            .await;

        assert!(
            matches!(
                res.status_code,
                Some(StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED)
            ),
            "unexpected status {:?}",
            res.status_code
        );
    }
}
