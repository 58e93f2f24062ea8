//! Projection of a fetched listing into an HTML table.
//!
//! A record shape only says which value goes in which column
//! ([`RecordShape`]); the projection and the markup are shared.
//!
mod html;
mod shape;

pub use html::{escape, page};
pub use shape::RecordShape;

use std::borrow::Cow;

use crate::fetch::FetchState;
use crate::normalizer::LinksDisplay;

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    /// CSS width applied to the header and body cells.
    pub width: Option<&'static str>,
}

impl Column {
    pub const fn new(title: &'static str) -> Self {
        Self { title, width: None }
    }

    pub const fn with_width(title: &'static str, width: &'static str) -> Self {
        Self {
            title,
            width: Some(width),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(Cow<'a, str>),
    /// Outbound link, opened in a new browsing context.
    Link { href: &'a str, text: &'a str },
    Image {
        src: &'a str,
        alt: &'static str,
        width: u32,
        height: u32,
    },
    Links(LinksDisplay<'a>),
}

impl<'a> Cell<'a> {
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Cell::Text(text.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<'a> {
    pub columns: &'static [Column],
    pub rows: Vec<Vec<Cell<'a>>>,
}

impl<'a> Table<'a> {
    /// One row per record, in listing order.
    pub fn project<R: RecordShape>(records: &'a [R]) -> Self {
        Self {
            columns: R::COLUMNS,
            rows: records.iter().map(RecordShape::cells).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        html::table(self)
    }
}

/// Renders the view for the given fetch state.
/// Only a `Ready` state produces a table, even an empty one.
pub fn render_state<R: RecordShape>(state: &FetchState<R>) -> String {
    match state {
        FetchState::Loading => format!("<div>{}</div>", LOADING_TEXT),
        FetchState::Failed(failure) => format!("<div>{}</div>", escape(&failure.to_string())),
        FetchState::Ready(records) => format!(
            "<h1>{}</h1>\n{}",
            escape(R::TITLE),
            Table::project(records).to_html()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchFailed;
    use crate::normalizer::{LinkEntry, NO_DESCRIPTION, NO_LINKS};
    use dex_screener::{BoostRecord, Link, ProfileRecord};

    fn boost(url: &str, description: Option<&str>, links: Option<Vec<Link>>) -> BoostRecord {
        BoostRecord {
            url: url.to_string(),
            chain_id: "solana".to_string(),
            icon: "i1".to_string(),
            header: "h1".to_string(),
            description: description.map(str::to_string),
            total_amount: 100.0,
            links,
        }
    }

    fn profile(links: Option<Vec<Link>>) -> ProfileRecord {
        ProfileRecord {
            url: "u2".to_string(),
            chain_id: "eth".to_string(),
            token_address: "0xabc".to_string(),
            icon: "i2".to_string(),
            header: "h2".to_string(),
            description: None,
            links,
        }
    }

    fn label_link(label: &str, url: &str) -> Link {
        Link {
            url: url.to_string(),
            label: Some(label.to_string()),
            kind: None,
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn boost_row_projection() {
        let records = vec![boost("u1", None, Some(vec![label_link("X", "lx")]))];
        let table = Table::project(&records);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Link { href: "u1", text: "OPEN" },
                Cell::text("solana"),
                Cell::Image { src: "i1", alt: "Token Icon", width: 50, height: 50 },
                Cell::Image { src: "h1", alt: "Token Header", width: 100, height: 50 },
                Cell::text(NO_DESCRIPTION),
                Cell::text("100"),
                Cell::Links(LinksDisplay::Entries(vec![LinkEntry { text: "X", url: "lx" }])),
            ]
        );
    }

    #[test]
    fn boost_row_html() {
        let records = vec![boost("u1", None, Some(vec![label_link("X", "lx")]))];
        let html = render_state(&FetchState::Ready(records));

        assert!(html.contains(
            r#"<a href="u1" target="_blank" rel="noopener noreferrer">OPEN</a>"#
        ));
        assert!(html.contains("<td>solana</td>"));
        assert!(html.contains(&format!(r#"<td style="width: 25%">{}</td>"#, NO_DESCRIPTION)));
        assert!(html.contains("<td>100</td>"));
        assert!(html.contains(
            r#"<div><a href="lx" target="_blank" rel="noopener noreferrer">X</a></div>"#
        ));
        assert_eq!(count(&html, "<tbody>\n<tr>"), 1);
    }

    #[test]
    fn profile_row_projection() {
        let records = vec![profile(Some(vec![]))];
        let table = Table::project(&records);

        assert_eq!(table.columns.len(), 7);
        assert_eq!(table.rows[0][0], Cell::Link { href: "u2", text: "u2" });
        assert_eq!(table.rows[0][2], Cell::text("0xabc"));
        assert_eq!(table.rows[0][6], Cell::Links(LinksDisplay::Fallback));

        let html = table.to_html();
        assert!(html.contains(&format!("<td>{}</td>", NO_LINKS)));
        assert!(html.contains(r#">u2</a>"#));
        assert!(!html.contains("OPEN"));
    }

    #[test]
    fn headers_per_shape() {
        let boosts = render_state::<BoostRecord>(&FetchState::Ready(vec![]));
        let titles: Vec<&str> = BoostRecord::COLUMNS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["DexScreener", "Chain ID", "Icon", "Header", "Description", "Total Amount", "Links"]
        );
        assert!(boosts.contains("<th>DexScreener</th>"));

        let titles: Vec<&str> = ProfileRecord::COLUMNS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["URL", "Chain ID", "Token Address", "Icon", "Header", "Description", "Links"]
        );
    }

    #[test]
    fn rows_follow_listing_order() {
        let records: Vec<BoostRecord> = (0..5)
            .map(|i| boost(&format!("https://dexscreener.com/t{}", i), Some("d"), None))
            .collect();
        let html = render_state(&FetchState::Ready(records));

        assert_eq!(count(&html, "<tr>"), 6);
        let positions: Vec<usize> = (0..5)
            .map(|i| {
                html.find(&format!("https://dexscreener.com/t{}", i))
                    .expect("row rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn link_count_matches_listing() {
        let links = vec![
            label_link("Website", "https://t.io"),
            Link { url: "https://x.com/t".to_string(), label: None, kind: Some("twitter".to_string()) },
            Link { url: "https://t.gg".to_string(), label: None, kind: None },
        ];
        let html = render_state(&FetchState::Ready(vec![boost("u1", Some("d"), Some(links))]));

        assert_eq!(count(&html, "<div><a "), 3);
        assert!(html.contains(r#"rel="noopener noreferrer">twitter</a>"#));
        assert!(html.contains(r#"<a href="https://t.gg" target="_blank" rel="noopener noreferrer"></a>"#));
    }

    #[test]
    fn empty_listing_renders_header_only() {
        let html = render_state::<BoostRecord>(&FetchState::Ready(vec![]));

        assert!(html.contains("<table>"));
        assert_eq!(count(&html, "<tr>"), 1);
        assert!(html.contains("<tbody>\n</tbody>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let state = FetchState::Ready(vec![
            boost("u1", Some("first"), Some(vec![label_link("X", "lx")])),
            boost("u2", None, None),
        ]);

        assert_eq!(render_state(&state), render_state(&state));
    }

    #[test]
    fn loading_has_no_table() {
        let html = render_state::<ProfileRecord>(&FetchState::Loading);

        assert_eq!(html, "<div>Loading...</div>");
        assert!(!html.contains("<table"));
    }

    #[test]
    fn failed_shows_the_fixed_message() {
        let html = render_state::<BoostRecord>(&FetchState::Failed(FetchFailed));

        assert_eq!(html, "<div>Failed to fetch data</div>");
        assert!(!html.contains("<table"));
    }

    #[test]
    fn upstream_text_is_escaped() {
        let record = boost("u1\" onmouseover=\"x", Some("<script>alert(1)</script>"), None);
        let html = render_state(&FetchState::Ready(vec![record]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"href="u1&quot; onmouseover=&quot;x""#));
    }
}
