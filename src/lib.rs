pub mod attach;
pub mod config;
pub mod error;
pub mod event;
pub mod guard;
pub mod identity_store_client;
pub mod runtime;
pub mod sso_admin_client;
