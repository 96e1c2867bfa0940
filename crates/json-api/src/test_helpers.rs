//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use stockroom_app::{context::AppContext, domain::inventory::MockInventoryService};

use crate::state::State;

pub(crate) fn state_with_inventory(inventory: MockInventoryService) -> Arc<State> {
    State::from_app_context(AppContext {
        inventory: Arc::new(inventory),
    })
}

pub(crate) fn inventory_service(inventory: MockInventoryService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_inventory(inventory)))
            .push(route),
    )
}
