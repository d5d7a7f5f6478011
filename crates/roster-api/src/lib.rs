// roster-api: Async Rust client for the roster users REST API.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::UsersClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::UserRecord;
