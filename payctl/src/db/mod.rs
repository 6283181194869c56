//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations, one per entity
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Repository Pattern
//!
//! Each repository in [`handlers`] wraps a `&mut PgConnection` and encapsulates
//! all database access for a specific entity type. Create repositories from a
//! transaction when the operation must be atomic, or from a pool connection for
//! read-only work:
//!
//! ```ignore
//! use payctl::db::handlers::Services;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let mut services = Services::new(tx.acquire().await?);
//!     services.grant(user_id, service_id).await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/`
//! directory. The [`crate::migrator`] function provides access to the migrator.

pub mod errors;
pub mod handlers;
pub mod models;
