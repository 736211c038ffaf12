//! Client side of the remote user service.
//!
//! The service exposes two calls this crate consumes:
//!
//! ```text
//! GET {base}/{users_path}/{id}   -> UserRecord
//! PUT {base}/{users_path}/{id}   <- UserRecord (full overwrite)
//! ```

mod client;
mod error;

pub use client::HttpUserApi;
pub use error::ApiError;

use async_trait::async_trait;

use crate::record::UserRecord;

/// Remote user service.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch one record by identifier.
    async fn detail(&self, id: &str) -> Result<UserRecord, ApiError>;

    /// Overwrite the record stored under `id` with `body`.
    async fn update(&self, id: &str, body: &UserRecord) -> Result<(), ApiError>;
}
