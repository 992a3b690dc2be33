//! Response mapping
//!
//! Converts machine results and errors into HTTP responses. Error responses
//! never carry a body; purchase rejections report the coins still held in
//! the `X-Coins` header.

use crate::types::{Coins, Purchase, Quantity, RequestError, VendingError};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Coins held (or returned) after the request
pub const X_COINS: HeaderName = HeaderName::from_static("x-coins");

/// Stock left for the purchased item
pub const X_INVENTORY_REMAINING: HeaderName = HeaderName::from_static("x-inventory-remaining");

/// JSON body of a successful purchase
#[derive(Debug, Serialize)]
struct PurchaseBody {
    quantity: Quantity,
}

/// `204 No Content` with the coin count in `X-Coins`
///
/// Used for both inserting coins (new total) and cancelling (coins returned).
pub fn coins(coins: Coins) -> Response {
    (StatusCode::NO_CONTENT, [(X_COINS, coins.to_string())]).into_response()
}

/// `200 OK` with the full inventory as a JSON array
pub fn inventory(stock: Vec<Quantity>) -> Response {
    Json(stock).into_response()
}

/// `200 OK` with a single item's stock as a JSON integer
pub fn item_quantity(quantity: Quantity) -> Response {
    Json(quantity).into_response()
}

/// `200 OK` for a purchase, with the dispensed quantity in the body
pub fn purchased(purchase: Purchase) -> Response {
    (
        StatusCode::OK,
        [
            (X_COINS, purchase.coins.to_string()),
            (X_INVENTORY_REMAINING, purchase.remaining.to_string()),
        ],
        Json(PurchaseBody {
            quantity: purchase.quantity,
        }),
    )
        .into_response()
}

impl IntoResponse for VendingError {
    fn into_response(self) -> Response {
        let status = match self {
            VendingError::OutOfStock { .. } => StatusCode::NOT_FOUND,
            VendingError::InsufficientFunds { .. } => StatusCode::FORBIDDEN,
        };
        (status, [(X_COINS, self.coins().to_string())]).into_response()
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::MalformedBody { .. } | RequestError::InvalidCoin { .. } => {
                StatusCode::BAD_REQUEST
            }
            RequestError::InvalidItemId { .. } | RequestError::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
        };
        status.into_response()
    }
}

/// Any failure the dispatcher can report
#[derive(Debug)]
pub enum ApiError {
    /// Rejected during validation; the machine was never touched
    Request(RequestError),

    /// Refused by the machine; its state is unchanged
    Vending(VendingError),
}

impl From<RequestError> for ApiError {
    fn from(error: RequestError) -> Self {
        ApiError::Request(error)
    }
}

impl From<VendingError> for ApiError {
    fn from(error: VendingError) -> Self {
        ApiError::Vending(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Request(error) => error.into_response(),
            ApiError::Vending(error) => error.into_response(),
        }
    }
}
