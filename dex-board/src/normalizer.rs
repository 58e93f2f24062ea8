//! Display values for the optional fields of a record.
//!
//! Records keep `None` for absent fields; substitution only happens here,
//! when a row is rendered.
//!
use dex_screener::Link;

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_LINKS: &str = "No links available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry<'a> {
    pub text: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinksDisplay<'a> {
    Entries(Vec<LinkEntry<'a>>),
    /// Replaces the whole list with [`NO_LINKS`].
    Fallback,
}

pub fn description_text(description: Option<&str>) -> &str {
    match description {
        Some(description) if !description.is_empty() => description,
        _ => NO_DESCRIPTION,
    }
}

/// `label`, else `type`, else nothing. Empty strings count as absent.
pub fn link_text(link: &Link) -> &str {
    [link.label.as_deref(), link.kind.as_deref()]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or("")
}

pub fn links_display(links: Option<&[Link]>) -> LinksDisplay<'_> {
    match links {
        Some(links) if !links.is_empty() => LinksDisplay::Entries(
            links
                .iter()
                .map(|link| LinkEntry {
                    text: link_text(link),
                    url: &link.url,
                })
                .collect(),
        ),
        _ => LinksDisplay::Fallback,
    }
}
