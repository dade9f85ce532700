// src/core/mod.rs
//! Client core: HTTP access, error taxonomy, session state, query cache.

pub mod api_client;
pub mod error;
pub mod query_cache;
pub mod session;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use query_cache::{QueryCache, QueryKey};
pub use session::Session;
