//! Stock Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use stockroom::prelude::Brand;
use tracing::debug;

use crate::{
    errors::ApiError, extensions::*, state::State, stock::responses::InventoryRecordResponse,
};

/// List Inventory
///
/// Returns every brand's record, or only the named brand's when `brand` is given.
/// An unrecognised brand matches nothing.
#[endpoint(tags("stock"), summary = "List Inventory")]
pub(crate) async fn handler(
    brand: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<InventoryRecordResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = match brand.into_inner().filter(|brand| !brand.is_empty()) {
        None => None,
        Some(name) => match name.parse::<Brand>() {
            Ok(brand) => Some(brand),
            Err(_) => {
                debug!(brand = %name, "unknown brand filter, nothing to match");

                return Ok(Json(Vec::new()));
            }
        },
    };

    let records = state
        .app
        .inventory
        .list_inventory(filter)
        .await
        .or_500("Failed to fetch inventory")?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
