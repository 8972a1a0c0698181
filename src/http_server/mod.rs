//! HTTP surface
//!
//! Thin glue between the wire and the core modules. Each route module
//! owns its shared state and request/response types; `errors` holds the
//! one API error taxonomy; `server` assembles and serves the router.
//!
//! # Endpoints
//!
//! - `POST /strings` - submit a string for analysis
//! - `GET /strings/{value}` - fetch one record
//! - `GET /strings` - filtered listing
//! - `GET /strings/filter-by-natural-language` - free-text filtering
//! - `DELETE /strings/{value}` - delete one record
//! - `GET /me` - maintainer profile + fun fact
//! - `GET /health` - health check

pub mod config;
pub mod errors;
pub mod profile_routes;
pub mod server;
pub mod string_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
