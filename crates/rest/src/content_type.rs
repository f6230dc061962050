//! Body content types
//!
//! The set of content types a request body may declare, plus the helper
//! used across the app to decide whether a body should be treated as JSON.
//! `application/octet-stream` joined the set in schema version 6 alongside
//! binary bodies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Content types a request body may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// `application/json`
    #[serde(rename = "application/json")]
    Json,
    /// `application/ld+json`
    #[serde(rename = "application/ld+json")]
    LdJson,
    /// `application/hal+json`
    #[serde(rename = "application/hal+json")]
    HalJson,
    /// `application/vnd.api+json`
    #[serde(rename = "application/vnd.api+json")]
    VndApiJson,
    /// `application/xml`
    #[serde(rename = "application/xml")]
    Xml,
    /// `text/xml`
    #[serde(rename = "text/xml")]
    TextXml,
    /// `application/x-www-form-urlencoded`
    #[serde(rename = "application/x-www-form-urlencoded")]
    UrlEncoded,
    /// `multipart/form-data`
    #[serde(rename = "multipart/form-data")]
    MultipartFormData,
    /// `text/html`
    #[serde(rename = "text/html")]
    Html,
    /// `text/plain`
    #[serde(rename = "text/plain")]
    Plain,
    /// `application/octet-stream` (binary bodies, schema version 6+)
    #[serde(rename = "application/octet-stream")]
    OctetStream,
}

impl ContentType {
    /// All valid content types, in display order
    pub const ALL: &'static [ContentType] = &[
        ContentType::Json,
        ContentType::LdJson,
        ContentType::HalJson,
        ContentType::VndApiJson,
        ContentType::Xml,
        ContentType::TextXml,
        ContentType::UrlEncoded,
        ContentType::MultipartFormData,
        ContentType::Html,
        ContentType::Plain,
        ContentType::OctetStream,
    ];

    /// The mime string for this content type
    pub const fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::LdJson => "application/ld+json",
            ContentType::HalJson => "application/hal+json",
            ContentType::VndApiJson => "application/vnd.api+json",
            ContentType::Xml => "application/xml",
            ContentType::TextXml => "text/xml",
            ContentType::UrlEncoded => "application/x-www-form-urlencoded",
            ContentType::MultipartFormData => "multipart/form-data",
            ContentType::Html => "text/html",
            ContentType::Plain => "text/plain",
            ContentType::OctetStream => "application/octet-stream",
        }
    }

    /// Look up a content type from its mime string
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ct| ct.mime() == mime)
    }

    /// Whether bodies of this type carry JSON
    pub fn is_json(&self) -> bool {
        is_json_content_type(self.mime())
    }
}

static JSON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bjson\b").expect("static pattern compiles"));

/// Case-insensitive word-boundary check for JSON-flavored content types
///
/// Matches `application/json` as well as suffixed types like
/// `application/vnd.api+json`; does not match `jsonp` and friends.
pub fn is_json_content_type(content_type: &str) -> bool {
    JSON_WORD.is_match(content_type)
}
