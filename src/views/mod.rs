use htmlescape::{encode_attribute, encode_minimal};
use percent_encoding::utf8_percent_encode;

use crate::clients::comic_client::URI_COMPONENT;

pub mod comic;
pub mod components;
pub mod error;
pub mod manhwa;

/// A rendered page body plus the metadata the layout needs.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub description: String,
    pub current_page: &'static str,
    pub body: String,
}

impl Page {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D, current_page: &'static str, body: String) -> Self {
        Self { title: title.into(), description: description.into(), current_page, body }
    }

    pub fn render(&self, site_name: &str) -> String {
        let nav_item = |href: &str, name: &str, label: &str| {
            let class = if self.current_page == name { "nav-link active" } else { "nav-link" };
            format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, label)
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {site}</title>
<meta name="description" content="{description}">
</head>
<body>
<header class="navbar">
<a class="brand" href="/">{site}</a>
<nav>{comic}{manhwa}</nav>
</header>
<main class="container">
{body}
</main>
</body>
</html>
"#,
            title = text(&self.title),
            site = text(site_name),
            description = attr(&self.description),
            comic = nav_item("/comic", "comic", "Komik"),
            manhwa = nav_item("/manhwa", "manhwa", "Manhwa"),
            body = self.body,
        )
    }
}

pub fn text(value: &str) -> String {
    encode_minimal(value)
}

pub fn attr(value: &str) -> String {
    encode_attribute(value)
}

/// Percent-encodes a query value so it can sit inside an `href`.
pub fn query_value(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
