//! Stock Change Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use stockroom::prelude::StockChangeDraft;
use stockroom_app::domain::inventory::InventoryServiceError;
use tracing::{Span, info, warn};

use crate::{
    errors::ApiError, extensions::*, state::State, stock::responses::InventoryRecordResponse,
};

/// Stock Change Request
///
/// Every field is required; they are optional here so that a missing field is
/// reported as such rather than as a malformed body. Values of the wrong JSON
/// type are kept and rejected as invalid for their field.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct StockChangeRequest {
    /// Brand name, e.g. `Bella+Canvas`
    #[serde(default, deserialize_with = "text")]
    pub brand: Option<String>,

    /// Size label without any youth prefix, e.g. `XL`
    #[serde(default, deserialize_with = "text")]
    pub size: Option<String>,

    /// `adult` or `youth`
    #[serde(default, deserialize_with = "text")]
    pub category: Option<String>,

    /// Units to add or remove, at least 1
    #[salvo(schema(value_type = Option<i64>))]
    pub quantity: Option<QuantityInput>,

    /// `add` or `remove`
    #[serde(default, deserialize_with = "text")]
    pub action: Option<String>,
}

/// Raw `quantity` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuantityInput {
    Integer(i64),

    /// A string, a fraction, or an integer outside `i64`.
    Malformed,
}

impl<'de> Deserialize<'de> for QuantityInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => number
                .as_i64()
                .map_or(Self::Malformed, Self::Integer),
            _ => Self::Malformed,
        })
    }
}

/// Strings pass through; any other non-null value keeps its JSON text.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl TryFrom<StockChangeRequest> for StockChangeDraft {
    type Error = ApiError;

    fn try_from(request: StockChangeRequest) -> Result<Self, Self::Error> {
        let quantity = match request.quantity {
            None => None,
            Some(QuantityInput::Integer(quantity)) => Some(quantity),
            Some(QuantityInput::Malformed) => return Err(ApiError::bad_request("Invalid quantity")),
        };

        Ok(StockChangeDraft {
            brand: request.brand,
            size: request.size,
            category: request.category,
            quantity,
            action: request.action,
        })
    }
}

/// Change Stock
///
/// Adds to or removes from one size of a brand and returns the updated record.
/// Removals never take a quantity below zero.
#[endpoint(tags("stock"), summary = "Change Stock")]
#[tracing::instrument(
    name = "stock.change",
    skip(json, depot),
    fields(
        brand = tracing::field::Empty,
        size = tracing::field::Empty,
        category = tracing::field::Empty,
        action = tracing::field::Empty,
        total_quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<StockChangeRequest>,
    depot: &mut Depot,
) -> Result<Json<InventoryRecordResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let change = StockChangeDraft::try_from(json.into_inner())?.validate()?;

    let span = Span::current();

    span.record("brand", change.brand().as_str());
    span.record("size", change.size().as_str());
    span.record("category", change.category().as_str());
    span.record("action", change.action().as_str());

    let record = match state.app.inventory.apply_stock_change(change).await {
        Err(InventoryServiceError::QuantityOutOfRange(error)) => {
            warn!("stock total would overflow: {error}");

            return Err(ApiError::bad_request("Invalid quantity"));
        }
        result => result.or_500("Failed to update inventory")?,
    };

    span.record("total_quantity", record.total_quantity());

    info!(quantity = change.quantity().get(), "stock changed");

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use salvo::test::{ResponseExt, TestClient};
    use stockroom::prelude::*;
    use stockroom_app::domain::inventory::{InventoryServiceError, MockInventoryService};
    use testresult::TestResult;

    use crate::{
        errors::ErrorResponse, stock::handlers::tests::nike_with_m,
        test_helpers::inventory_service,
    };

    use super::*;

    fn make_service(inventory: MockInventoryService) -> Service {
        inventory_service(inventory, Router::with_path("stock").post(handler))
    }

    fn untouched() -> MockInventoryService {
        let mut inventory = MockInventoryService::new();

        inventory.expect_apply_stock_change().never();
        inventory.expect_list_inventory().never();
        inventory.expect_summarize_inventory().never();

        inventory
    }

    async fn post(inventory: MockInventoryService, body: serde_json::Value) -> Response {
        TestClient::post("http://example.com/stock")
            .json(&body)
            .send(&make_service(inventory))
            .await
    }

    #[tokio::test]
    async fn applies_valid_change() -> TestResult {
        let mut inventory = MockInventoryService::new();

        inventory
            .expect_apply_stock_change()
            .once()
            .withf(|change| {
                change.brand() == Brand::Nike
                    && change.size() == Size::M
                    && change.category() == Category::Adult
                    && change.quantity().get() == 5
                    && change.action() == StockAction::Add
            })
            .return_once(|_| Ok(nike_with_m(5)));

        let mut res = post(
            inventory,
            json!({
                "brand": "Nike",
                "size": "M",
                "category": "adult",
                "quantity": 5,
                "action": "add"
            }),
        )
        .await;

        let record: InventoryRecordResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(record.brand, "Nike");
        assert_eq!(record.total_quantity, 5);
        assert_eq!(record.sizes[0].size, "M");
        assert_eq!(record.sizes[0].category, "adult");

        Ok(())
    }

    #[tokio::test]
    async fn accepts_youth_sizes_without_prefix() -> TestResult {
        let mut inventory = MockInventoryService::new();

        inventory
            .expect_apply_stock_change()
            .once()
            .withf(|change| change.size() == Size::Xl && change.category() == Category::Youth)
            .return_once(|_| Ok(nike_with_m(0)));

        let res = post(
            inventory,
            json!({
                "brand": "Nike",
                "size": "XL",
                "category": "youth",
                "quantity": 1,
                "action": "remove"
            }),
        )
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn missing_quantity_is_rejected_before_storage() -> TestResult {
        let mut res = post(
            untouched(),
            json!({ "brand": "Nike", "size": "M", "category": "adult", "action": "add" }),
        )
        .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Missing required fields");

        Ok(())
    }

    #[tokio::test]
    async fn empty_and_zero_values_count_as_missing() -> TestResult {
        for body in [
            json!({ "brand": "", "size": "M", "category": "adult", "quantity": 1, "action": "add" }),
            json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": 0, "action": "add" }),
        ] {
            let mut res = post(untouched(), body).await;
            let error: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(error.error, "Missing required fields");
        }

        Ok(())
    }

    #[tokio::test]
    async fn invalid_fields_are_named() -> TestResult {
        let cases = [
            (json!({ "brand": "Acme", "size": "M", "category": "adult", "quantity": 1, "action": "add" }), "Invalid brand"),
            (json!({ "brand": "Nike", "size": "2XL", "category": "youth", "quantity": 1, "action": "add" }), "Invalid size"),
            (json!({ "brand": "Nike", "size": "M", "category": "toddler", "quantity": 1, "action": "add" }), "Invalid category"),
            (json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": -2, "action": "add" }), "Invalid quantity"),
            (json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": 1, "action": "restock" }), "Invalid action"),
        ];

        for (body, expected) in cases {
            let mut res = post(untouched(), body).await;
            let error: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(error.error, expected);
        }

        Ok(())
    }

    #[tokio::test]
    async fn wrongly_typed_fields_are_invalid() -> TestResult {
        let cases = [
            (json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": "5", "action": "add" }), "Invalid quantity"),
            (json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": 2.5, "action": "add" }), "Invalid quantity"),
            (json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": u64::MAX, "action": "add" }), "Invalid quantity"),
            (json!({ "brand": 7, "size": "M", "category": "adult", "quantity": 1, "action": "add" }), "Invalid brand"),
            (json!({ "brand": "Nike", "size": "M", "category": "adult", "quantity": 1, "action": true }), "Invalid action"),
        ];

        for (body, expected) in cases {
            let mut res = post(untouched(), body).await;
            let error: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(error.error, expected);
        }

        Ok(())
    }

    #[tokio::test]
    async fn null_fields_count_as_missing() -> TestResult {
        let mut res = post(
            untouched(),
            json!({ "brand": "Nike", "size": null, "category": "adult", "quantity": null, "action": "add" }),
        )
        .await;

        let error: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(error.error, "Missing required fields");

        Ok(())
    }

    #[tokio::test]
    async fn total_beyond_storage_range_is_rejected() -> TestResult {
        let mut inventory = MockInventoryService::new();

        inventory
            .expect_apply_stock_change()
            .once()
            .return_once(|_| match i64::try_from(u64::MAX) {
                Err(overflow) => Err(InventoryServiceError::QuantityOutOfRange(overflow)),
                Ok(_) => Err(InventoryServiceError::InvalidData),
            });

        let mut res = post(
            inventory,
            json!({
                "brand": "Nike",
                "size": "M",
                "category": "adult",
                "quantity": i64::MAX,
                "action": "add"
            }),
        )
        .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid quantity");

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_returns_500_with_message() -> TestResult {
        let mut inventory = MockInventoryService::new();

        inventory
            .expect_apply_stock_change()
            .once()
            .return_once(|_| Err(InventoryServiceError::InvalidData));

        let mut res = post(
            inventory,
            json!({
                "brand": "Hanes",
                "size": "S",
                "category": "adult",
                "quantity": 2,
                "action": "add"
            }),
        )
        .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "Failed to update inventory");

        Ok(())
    }
}
