//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use waybill_app::{context::AppContext, domain::delivery::MockDeliveryService};

use crate::state::State;

/// Zone administration is CLI-only; no HTTP handler may reach it.
pub(crate) fn forbid_admin_calls(delivery: &mut MockDeliveryService) {
    delivery.expect_create_zone().never();
    delivery.expect_set_zone_cost().never();
    delivery.expect_set_zone_active().never();
    delivery.expect_set_cost_active().never();
    delivery.expect_delete_zone().never();
}

pub(crate) fn state_with_delivery(delivery: MockDeliveryService) -> Arc<State> {
    State::from_app_context(AppContext {
        delivery: Arc::new(delivery),
    })
}

pub(crate) fn delivery_service(delivery: MockDeliveryService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_delivery(delivery)))
            .push(route),
    )
}
