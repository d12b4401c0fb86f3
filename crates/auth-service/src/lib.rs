//! Campus Auth Service Library
//!
//! Issues and validates the JWT session tokens used by the campus-services
//! web application, and exposes the login HTTP surface backed by the
//! external SUAP credential check.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Bearer-token authentication middleware
//! - `models` - Data models and wire types
//! - `routes` - Router and application state
//! - `services` - Token lifecycle and external collaborators

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
