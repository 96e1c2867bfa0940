//! Stock Summary Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, state::State, stock::responses::BrandSummaryResponse,
};

/// Inventory Summary
///
/// Total quantity and record count for every stocked brand.
#[endpoint(tags("stock"), summary = "Inventory Summary")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BrandSummaryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summaries = state
        .app
        .inventory
        .summarize_inventory()
        .await
        .or_500("Failed to fetch inventory summary")?;

    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}
