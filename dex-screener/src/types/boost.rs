use serde::{Deserialize, Serialize};

use super::{Endpoint, Link};

/// One entry of the top token boosts listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostRecord {
    /// DexScreener page of the token.
    pub url: String,
    pub chain_id: String,
    pub icon: String,
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Endpoint for BoostRecord {
    const PATH: &'static str = "/token-boosts/top/v1";
}
