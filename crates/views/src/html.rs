//! Small helpers for building HTML strings.

use serde::Serialize;

/// Inner HTML for one stable element id on the page.
///
/// Renderers produce regions; the page shell (or a client-side swap) mounts
/// them by `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub target: &'static str,
    pub html: String,
}

impl Region {
    pub fn new(target: &'static str, html: impl Into<String>) -> Self {
        Self {
            target,
            html: html.into(),
        }
    }

    /// Wrap the region in its container element.
    pub fn mount(&self, tag: &str, class: &str) -> String {
        if class.is_empty() {
            format!(r#"<{tag} id="{}">{}</{tag}>"#, self.target, self.html)
        } else {
            format!(
                r#"<{tag} id="{}" class="{class}">{}</{tag}>"#,
                self.target, self.html
            )
        }
    }
}

/// Escape text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a query or path component (RFC 3986 unreserved set kept).
pub fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Build `path?k=v&...`, skipping empty values.
pub fn href(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={}", encode_component(v)))
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&amp;"))
    }
}
