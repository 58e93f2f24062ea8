use std::borrow::Cow;

use super::{Cell, Column, Table};
use crate::normalizer::{LinksDisplay, NO_LINKS};

const STYLE: &str = "body { padding: 20px; font-family: sans-serif; }
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
th, td { border: 1px solid black; padding: 8px; }
a { text-decoration: underline; color: blue; }";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Wraps a rendered fragment into a standalone document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

pub(super) fn table(table: &Table<'_>) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr>");
    for column in table.columns {
        html.push_str(&format!(
            "<th{}>{}</th>",
            width_attr(column),
            escape(column.title)
        ));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for (column, cell) in table.columns.iter().zip(row) {
            html.push_str(&format!("<td{}>{}</td>", width_attr(column), cell_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn width_attr(column: &Column) -> String {
    match column.width {
        Some(width) => format!(" style=\"width: {}\"", escape(width)),
        None => String::new(),
    }
}

fn anchor(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(text)
    )
}

fn cell_html(cell: &Cell<'_>) -> String {
    match cell {
        Cell::Text(text) => escape(text).into_owned(),
        Cell::Link { href, text } => anchor(href, text),
        Cell::Image {
            src,
            alt,
            width,
            height,
        } => format!(
            "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">",
            escape(src),
            escape(alt),
            width,
            height
        ),
        Cell::Links(LinksDisplay::Entries(entries)) => entries
            .iter()
            .map(|entry| format!("<div>{}</div>", anchor(entry.url, entry.text)))
            .collect(),
        Cell::Links(LinksDisplay::Fallback) => NO_LINKS.to_string(),
    }
}
