//! Stock API client.

use serde::Deserialize;
use stockroom::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// The API is served from the same origin as the dashboard.
fn url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();

    format!("{origin}{path}")
}

async fn read<T>(response: reqwest::Response) -> Result<T, ClientError>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
    };

    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn fetch_inventory() -> Result<Vec<InventoryRecord>, ClientError> {
    read(reqwest::get(url("/stock")).await?).await
}

pub(crate) async fn submit_change(change: &StockChange) -> Result<InventoryRecord, ClientError> {
    let response = reqwest::Client::new()
        .post(url("/stock"))
        .json(change)
        .send()
        .await?;

    read(response).await
}
