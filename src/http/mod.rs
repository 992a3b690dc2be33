//! HTTP layer
//!
//! Maps HTTP requests onto [`VendingMachine`](crate::core::VendingMachine)
//! operations. The layer owns all request validation and response encoding;
//! it holds no business logic of its own.
//!
//! | Route | Operation |
//! |---|---|
//! | `PUT /` | insert a coin |
//! | `DELETE /` | cancel the transaction |
//! | `GET /inventory` | stock for every item |
//! | `GET /inventory/{id}` | stock for one item |
//! | `PUT /inventory/{id}` | purchase one item |

pub mod request;
pub mod response;
pub mod router;
pub mod server;

pub use request::Route;
pub use response::ApiError;
pub use router::{create_router, SharedMachine};
pub use server::{bind, serve, shutdown_signal};
