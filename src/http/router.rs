//! Request dispatch
//!
//! The router hands every request to a single dispatcher, which normalizes
//! the path itself (see [`Route::resolve`]) instead of relying on axum's
//! path matching, then runs the matching machine operation.

use super::request::{parse_insert_coin, Route};
use super::response::{self, ApiError};
use crate::core::VendingMachine;
use crate::types::RequestError;
use axum::body::{to_bytes, Body, Bytes};
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Machine shared by every request handler
pub type SharedMachine = Arc<dyn VendingMachine>;

/// Largest insert-coin body read before the request is rejected as malformed
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the service router over a shared machine
///
/// Each request is traced (method, URI, status, latency) through
/// `tower-http`'s `TraceLayer`.
pub fn create_router(machine: SharedMachine) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(machine)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(machine): State<SharedMachine>,
    method: Method,
    uri: Uri,
    body: Body,
) -> Response {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |path_and_query| path_and_query.as_str());

    match route_request(machine.as_ref(), &method, target, body).await {
        Ok(response) => response,
        Err(ApiError::Request(error)) => {
            debug!(%method, path = target, error = %error, "Request rejected");
            error.into_response()
        }
        Err(ApiError::Vending(error)) => {
            info!(%method, path = target, error = %error, "Purchase refused");
            error.into_response()
        }
    }
}

/// Resolve the route, then read the body only if the route needs one
async fn route_request(
    machine: &dyn VendingMachine,
    method: &Method,
    target: &str,
    body: Body,
) -> Result<Response, ApiError> {
    let route = Route::resolve(method, target, machine.item_count())?;
    let body = match route {
        Route::InsertCoin => read_body(body).await?,
        _ => Bytes::new(),
    };
    execute(machine, route, &body)
}

/// Collect a request body of at most [`MAX_BODY_BYTES`]
async fn read_body(body: Body) -> Result<Bytes, RequestError> {
    to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|error| RequestError::malformed_body(format!("unreadable body: {error}")))
}

/// Validate a request and run it against the machine
///
/// Validation completes before any machine operation starts, so a rejected
/// request has no side effects.
pub fn handle(
    machine: &dyn VendingMachine,
    method: &Method,
    target: &str,
    body: &[u8],
) -> Result<Response, ApiError> {
    let route = Route::resolve(method, target, machine.item_count())?;
    execute(machine, route, body)
}

fn execute(
    machine: &dyn VendingMachine,
    route: Route,
    body: &[u8],
) -> Result<Response, ApiError> {
    let response = match route {
        Route::InsertCoin => {
            let coin = parse_insert_coin(body)?;
            response::coins(machine.insert_coin(coin))
        }
        Route::CancelTransaction => response::coins(machine.cancel_transaction()),
        Route::Inventory => response::inventory(machine.inventory()),
        Route::ItemQuantity(item) => response::item_quantity(machine.item_quantity(item)),
        Route::Purchase(item) => response::purchased(machine.purchase(item)?),
    };
    Ok(response)
}
