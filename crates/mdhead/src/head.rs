//! The head record and the recognized head keys.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Metadata extracted from a document head.
///
/// Every field is optional; `None` (or an empty `tags`) means the key was
/// never seen. Keys that are not recognized land in [`Head::extra`].
///
/// Values are decoded from the raw head bytes as lossy UTF-8: invalid
/// sequences become U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    pub title: Option<String>,
    /// Short identifier, restricted to letters, digits, `_` and `-`
    pub urlid: Option<String>,
    pub overview: Option<String>,
    pub category: Option<String>,
    pub lang: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Unrecognized keys (lowercased) mapped to their raw value. Last write wins.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl Head {
    /// True when no key of any kind was recorded.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Look up an unrecognized key. The key is matched case-insensitively.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// A head key with a dedicated field in [`Head`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    UrlId,
    Overview,
    Category,
    Tags,
    Image,
    Lang,
    PublishedAt,
    UpdatedAt,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::UrlId,
        Field::Overview,
        Field::Category,
        Field::Tags,
        Field::Image,
        Field::Lang,
        Field::PublishedAt,
        Field::UpdatedAt,
    ];

    /// Resolve a head key, ignoring ASCII case. Synonyms map to the same field.
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key.to_ascii_lowercase().as_str() {
            "title" => Self::Title,
            "urlid" => Self::UrlId,
            "overview" => Self::Overview,
            "cate" | "category" => Self::Category,
            "tags" => Self::Tags,
            "image" | "img" => Self::Image,
            "lang" => Self::Lang,
            "published_at" => Self::PublishedAt,
            "updated_at" => Self::UpdatedAt,
            _ => return None,
        };
        Some(field)
    }

    /// Canonical key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::UrlId => "urlid",
            Self::Overview => "overview",
            Self::Category => "category",
            Self::Tags => "tags",
            Self::Image => "image",
            Self::Lang => "lang",
            Self::PublishedAt => "published_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
