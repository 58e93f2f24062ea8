//! Records served by the DexScreener listing endpoints.
//!
mod boost;
mod link;
mod profile;

pub use boost::BoostRecord;
pub use link::Link;
pub use profile::ProfileRecord;

pub const DEFAULT_API_BASE_URL: &str = "https://api.dexscreener.com";

/// A record shape served as a JSON array by a fixed endpoint.
pub trait Endpoint {
    /// Path of the endpoint, relative to the API base URL.
    const PATH: &'static str;
}

/// Returns the absolute URL of the endpoint serving `E` under `base_url`.
pub fn endpoint_url<E: Endpoint>(base_url: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        E::PATH.trim_start_matches('/')
    )
}
