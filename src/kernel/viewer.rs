//! Embedded-page viewer: address bar state and URL normalization. Fetching and painting the
//! page belongs to the surface.

use thiserror::Error;
use url::Url;

/// Address the `self` keyword resolves to.
pub const SELF_URL: &str = "zerodesk://desktop";

pub const QUICK_LINKS: [(&str, &str); 5] = [
    ("This desktop", "self"),
    ("Example", "https://example.com"),
    ("HTTPBingo", "https://httpbingo.org/html"),
    ("NeverSSL", "https://neverssl.com"),
    ("CNN Lite", "https://lite.cnn.com"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("Invalid URL")]
    InvalidUrl(String),
}

/// Trims, expands `self`, and prefixes `https://` when no http(s) scheme is present.
///
/// The address is checked with a WHATWG parse but returned as typed, not in canonical form.
pub fn normalize_url(raw: &str) -> Result<String, ViewerError> {
    let raw = raw.trim();
    if raw == "self" {
        return Ok(SELF_URL.to_string());
    }
    let url = if has_http_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    match Url::parse(&url) {
        Ok(_) => Ok(url),
        Err(err) => {
            tracing::trace!(error = %err, address = %url, "url parse failed");
            Err(ViewerError::InvalidUrl(raw.to_string()))
        }
    }
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    address: String,
    current_url: Option<String>,
    message: Option<String>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        self.address.push_str(&text);
        !text.is_empty()
    }

    pub fn delete_backward(&mut self) -> bool {
        self.address.pop().is_some()
    }

    /// Navigates to `raw`, or to the typed address when `None`. Returns the URL to embed.
    pub fn go(&mut self, raw: Option<&str>) -> Option<String> {
        let raw = raw.map(str::to_string).unwrap_or_else(|| self.address.clone());
        match normalize_url(&raw) {
            Ok(url) => {
                self.address = url.clone();
                self.current_url = Some(url.clone());
                self.message = None;
                Some(url)
            }
            Err(err) => {
                tracing::debug!(address = %raw, "rejected viewer address");
                self.message = Some(err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/viewer.rs"]
mod tests;
