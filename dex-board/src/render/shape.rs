use dex_screener::{BoostRecord, Endpoint, ProfileRecord};
use serde::de::DeserializeOwned;

use super::{Cell, Column};
use crate::normalizer::{description_text, links_display};

const ICON_ALT: &str = "Token Icon";
const HEADER_ALT: &str = "Token Header";

/// Describes one board: where its records come from and how a record maps
/// onto the columns.
pub trait RecordShape: Endpoint + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Page title, also shown above the table.
    const TITLE: &'static str;
    const COLUMNS: &'static [Column];

    /// One cell per entry of `COLUMNS`, in the same order.
    fn cells(&self) -> Vec<Cell<'_>>;
}

impl RecordShape for BoostRecord {
    const TITLE: &'static str = "Top Token Boosts";
    const COLUMNS: &'static [Column] = &[
        Column::new("DexScreener"),
        Column::new("Chain ID"),
        Column::new("Icon"),
        Column::new("Header"),
        Column::with_width("Description", "25%"),
        Column::new("Total Amount"),
        Column::new("Links"),
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Link {
                href: &self.url,
                text: "OPEN",
            },
            Cell::text(self.chain_id.as_str()),
            Cell::Image {
                src: &self.icon,
                alt: ICON_ALT,
                width: 50,
                height: 50,
            },
            Cell::Image {
                src: &self.header,
                alt: HEADER_ALT,
                width: 100,
                height: 50,
            },
            Cell::text(description_text(self.description.as_deref())),
            Cell::text(self.total_amount.to_string()),
            Cell::Links(links_display(self.links.as_deref())),
        ]
    }
}

impl RecordShape for ProfileRecord {
    const TITLE: &'static str = "Latest Token Profiles";
    const COLUMNS: &'static [Column] = &[
        Column::new("URL"),
        Column::new("Chain ID"),
        Column::new("Token Address"),
        Column::new("Icon"),
        Column::new("Header"),
        Column::with_width("Description", "25%"),
        Column::new("Links"),
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Link {
                href: &self.url,
                text: &self.url,
            },
            Cell::text(self.chain_id.as_str()),
            Cell::text(self.token_address.as_str()),
            Cell::Image {
                src: &self.icon,
                alt: ICON_ALT,
                width: 50,
                height: 50,
            },
            Cell::Image {
                src: &self.header,
                alt: HEADER_ALT,
                width: 100,
                height: 50,
            },
            Cell::text(description_text(self.description.as_deref())),
            Cell::Links(links_display(self.links.as_deref())),
        ]
    }
}
