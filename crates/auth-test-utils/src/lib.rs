//! # Auth Test Utilities
//!
//! Shared test utilities for the campus auth service.
//!
//! This crate provides:
//! - Test data builders (`TestTokenBuilder` for signed session tokens)
//! - Custom assertions (`TokenAssertions` trait)
//! - Server test harness (`TestAuthServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auth_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let token = TestTokenBuilder::new()
//!         .for_user(7, "alice")
//!         .expires_in(3600)
//!         .sign(TEST_JWT_SECRET);
//!
//!     token.assert_valid_jwt().assert_for_user(7, "alice");
//! }
//! ```

pub mod assertions;
pub mod server_harness;
pub mod token_builders;

// Re-export commonly used items
pub use assertions::TokenAssertions;
pub use server_harness::{TestAuthServer, TEST_JWT_SECRET, TEST_TTL_MINUTES};
pub use token_builders::TestTokenBuilder;
