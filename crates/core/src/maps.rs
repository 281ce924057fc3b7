#![forbid(unsafe_code)]

//! Map-link rule shared by every entry write path.
//!
//! An entry is only useful to the mapping client when it carries a link the
//! client can open, so both the store and the tool surface reject entries
//! without one. The store checks presence; the tool surface checks the shape.

use regex::Regex;
use std::sync::LazyLock;
use url::form_urlencoded;

static MAPS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://((www\.)?google\.(com|[a-z]{2,3})(\.[a-z]{2})?/maps|maps\.google\.(com|[a-z]{2,3})(\.[a-z]{2})?/|maps\.app\.goo\.gl/|goo\.gl/maps/)",
    )
    .expect("maps link pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapsLinkError {
    Missing,
    NotAMapsLink,
}

impl MapsLinkError {
    pub fn message(self) -> &'static str {
        match self {
            MapsLinkError::Missing => "googleMapsUrl is required",
            MapsLinkError::NotAMapsLink => {
                "googleMapsUrl must be a Google Maps link like https://maps.google.com/maps?q=PLACE+NAME+CITY"
            }
        }
    }
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_maps_link(value: &str) -> Result<(), MapsLinkError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MapsLinkError::Missing);
    }
    if !MAPS_LINK.is_match(value) {
        return Err(MapsLinkError::NotAMapsLink);
    }
    Ok(())
}

/// Builds a search link for a place when the agent only knows its name.
/// The name is form-encoded, so spaces become `+` and `&`, `#`, `?` or `%`
/// cannot break out of the `q` parameter.
pub fn search_link(query: &str) -> String {
    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://maps.google.com/maps?q={encoded}")
}
