//! Business logic layer: token lifecycle and external collaborators.

pub mod suap_client;
pub mod token_service;
pub mod user_directory;

pub use suap_client::{LoginProvider, SuapClient};
pub use token_service::TokenService;
pub use user_directory::{HttpUserDirectory, UserDirectory};
