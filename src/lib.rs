//! Estoque - in-memory product inventory REST API
//!
//! A small HTTP service that registers product records, keeps them in
//! process memory and serves them back as JSON. No persistence: the store
//! lives for the process lifetime only.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use estoque::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     estoque::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - HTML banner
//! - `GET /produto` - list registered products
//! - `POST /produto` - register a product
//! - `DELETE /produto/{id}` - remove a product by id
//!
//! Success responses are JSON (`application/json; charset=utf-8`); failures
//! answer the outcome's status code with its message as a plain-text body.

pub mod config;
pub mod error;
pub mod middleware;
pub mod product;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, Outcome};
pub use product::Product;
pub use server::{build_router, start_server};
pub use state::AppState;
pub use store::ProductStore;
