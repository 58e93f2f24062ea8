use serde::{Deserialize, Serialize};

use super::{Endpoint, Link};

/// One entry of the latest token profiles listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub url: String,
    pub chain_id: String,
    pub token_address: String,
    pub icon: String,
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Endpoint for ProfileRecord {
    const PATH: &'static str = "/token-profiles/latest/v1";
}
