use crate::domain::purchase::PurchaseOutcome;
use crate::error::VendingError;
use axum::{
    Json,
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Coins reported back to the caller: the running total, coins returned, or change.
pub const X_COINS: HeaderName = HeaderName::from_static("x-coins");
/// Stock left in the slot after a successful purchase.
pub const X_INVENTORY_REMAINING: HeaderName = HeaderName::from_static("x-inventory-remaining");

/// Header pair carrying a coin count.
pub fn coins_header(coins: u32) -> [(HeaderName, String); 1] {
    [(X_COINS, coins.to_string())]
}

impl IntoResponse for PurchaseOutcome {
    fn into_response(self) -> Response {
        match self {
            PurchaseOutcome::Dispensed(dispensed) => (
                StatusCode::OK,
                [
                    (X_COINS, dispensed.change.to_string()),
                    (X_INVENTORY_REMAINING, dispensed.remaining_stock.to_string()),
                ],
                Json(dispensed),
            )
                .into_response(),
            PurchaseOutcome::OutOfStock { coins } => {
                (StatusCode::NOT_FOUND, coins_header(coins)).into_response()
            }
            PurchaseOutcome::InsufficientFunds { coins } => {
                (StatusCode::FORBIDDEN, coins_header(coins)).into_response()
            }
        }
    }
}

impl IntoResponse for VendingError {
    fn into_response(self) -> Response {
        let status = match &self {
            VendingError::InvalidSlot(_) | VendingError::MalformedSlot(_) => StatusCode::NOT_FOUND,
            VendingError::InvalidCoin(_)
            | VendingError::BodyNotObject
            | VendingError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            VendingError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        status.into_response()
    }
}
