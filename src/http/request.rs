//! Request validation
//!
//! Turns a raw method, request target and body into a [`Route`] the
//! dispatcher can run against the machine. Every check that can reject a
//! request happens here, before the core is touched.
//!
//! # Path Normalization
//!
//! 1. Drop the query string
//! 2. Drop trailing slashes; an empty result is the root `/`
//! 3. Drop leading slashes and split on `/`
//!
//! So `/inventory/`, `/inventory?x=1` and `//inventory` all resolve to the
//! inventory listing.

use crate::types::{Coin, ItemId, RequestError};
use axum::http::Method;
use serde_json::Value;

/// A validated request, ready to run against the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `PUT /`: insert a coin (the body is parsed separately)
    InsertCoin,

    /// `DELETE /`: cancel the transaction and return the coins
    CancelTransaction,

    /// `GET /inventory`: stock for every item
    Inventory,

    /// `GET /inventory/{id}`: stock for one item
    ItemQuantity(ItemId),

    /// `PUT /inventory/{id}`: buy one unit of an item
    Purchase(ItemId),
}

impl Route {
    /// Resolve a request to a route
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `target` - Request target (path plus optional query string)
    /// * `item_count` - Number of items the machine stocks, for ID validation
    ///
    /// # Errors
    ///
    /// * `RequestError::InvalidItemId` if an `{id}` segment is not an
    ///   integer in `[0, item_count)`
    /// * `RequestError::RouteNotFound` for any other method/path combination
    pub fn resolve(
        method: &Method,
        target: &str,
        item_count: usize,
    ) -> Result<Self, RequestError> {
        let segments = normalize_path(target);
        let not_found = || RequestError::route_not_found(method.as_str(), target);

        match segments.as_slice() {
            [""] => match *method {
                Method::PUT => Ok(Route::InsertCoin),
                Method::DELETE => Ok(Route::CancelTransaction),
                _ => Err(not_found()),
            },
            ["inventory"] if *method == Method::GET => Ok(Route::Inventory),
            ["inventory", raw_id] => {
                let item = ItemId::parse(raw_id, item_count)?;
                match *method {
                    Method::GET => Ok(Route::ItemQuantity(item)),
                    Method::PUT => Ok(Route::Purchase(item)),
                    _ => Err(not_found()),
                }
            }
            _ => Err(not_found()),
        }
    }
}

/// Split a request target into path segments
///
/// The root path yields a single empty segment.
pub fn normalize_path(target: &str) -> Vec<&str> {
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return vec![""];
    }
    path.trim_start_matches('/').split('/').collect()
}

/// Parse the body of an insert-coin request
///
/// The body must be a JSON object whose `coin` field is the integer 0 or 1.
/// There are no defaults: an empty body or a missing field is rejected.
///
/// # Errors
///
/// * `RequestError::MalformedBody` if the body is empty, is not valid JSON,
///   is not an object, or has no non-negative integer `coin` field
/// * `RequestError::InvalidCoin` if `coin` is an integer other than 0 or 1
pub fn parse_insert_coin(body: &[u8]) -> Result<Coin, RequestError> {
    if body.is_empty() {
        return Err(RequestError::malformed_body("request body is empty"));
    }

    let value: Value = serde_json::from_slice(body)?;
    let coin = value
        .as_object()
        .ok_or_else(|| RequestError::malformed_body("request body must be a JSON object"))?
        .get("coin")
        .ok_or_else(|| RequestError::malformed_body("missing field `coin`"))?;
    let raw = coin.as_u64().ok_or_else(|| {
        RequestError::malformed_body(format!("`coin` must be 0 or 1, got {coin}"))
    })?;

    Coin::try_from(raw)
}
