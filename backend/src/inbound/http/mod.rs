//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod identity;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
