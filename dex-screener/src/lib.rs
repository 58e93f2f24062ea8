//! Types and transport to read the public DexScreener endpoints.
//!
//! Only the read-only listing endpoints used by the board are covered:
//! the top token boosts and the latest token profiles.
//!
pub mod providers;
pub mod types;

pub use providers::{HttpJsonSource, JsonSource, ProviderError};
pub use types::{endpoint_url, BoostRecord, Endpoint, Link, ProfileRecord, DEFAULT_API_BASE_URL};
#[cfg(any(test, feature = "mock"))]
pub use providers::MockJsonSource;
