//! HTTP API layer.
//!
//! - [`handlers`]: axum request handlers, one module per admin resource
//! - [`models`]: request/response wire types
//!
//! Handlers validate input, open a database connection (or transaction when
//! the operation must be atomic), delegate to the `db::handlers`
//! repositories, and convert rows to wire types. Authentication and IP
//! allow-listing happen upstream of this service.

pub mod handlers;
pub mod models;
