//! Request handlers. Each one parses its input, calls a single engine
//! operation, and lets [`super::response`] shape the reply.

use super::SharedEngine;
use super::response::coins_header;
use crate::domain::purchase::PurchaseOutcome;
use crate::error::{Result, VendingError};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Body of `PUT /`.
///
/// A missing body or a missing `coin` field counts as zero coins.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CoinRequest {
    #[serde(default)]
    pub coin: i64,
}

impl CoinRequest {
    /// Parses and validates a request body. The machine takes one coin at a
    /// time, so only `0` and `1` are accepted.
    pub fn parse(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(VendingError::BodyNotObject);
        }
        let request: Self = serde_json::from_value(value)?;
        if !(0..=1).contains(&request.coin) {
            return Err(VendingError::InvalidCoin(request.coin));
        }
        Ok(request)
    }
}

fn parse_slot(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| VendingError::MalformedSlot(raw.to_string()))
}

/// `PUT /`
pub async fn insert_coin(State(engine): State<SharedEngine>, body: Bytes) -> Result<Response> {
    let request = CoinRequest::parse(&body)?;
    let total = engine.insert_coin(request.coin);
    Ok((StatusCode::NO_CONTENT, coins_header(total)).into_response())
}

/// `DELETE /`
pub async fn cancel(State(engine): State<SharedEngine>) -> Response {
    let returned = engine.cancel();
    (StatusCode::NO_CONTENT, coins_header(returned)).into_response()
}

/// `GET /inventory`
pub async fn inventory(State(engine): State<SharedEngine>) -> Json<Vec<u32>> {
    Json(engine.inventory())
}

/// `GET /inventory/{id}`
pub async fn item_quantity(
    State(engine): State<SharedEngine>,
    Path(id): Path<String>,
) -> Result<Json<u32>> {
    let id = parse_slot(&id)?;
    Ok(Json(engine.quantity(id)?))
}

/// `PUT /inventory/{id}`
pub async fn purchase(
    State(engine): State<SharedEngine>,
    Path(id): Path<String>,
) -> Result<PurchaseOutcome> {
    let id = parse_slot(&id)?;
    engine.purchase(id)
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
