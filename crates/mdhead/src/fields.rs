//! Field dispatch and value post-processing.
//!
//! Each completed `key: value` line from the head is handed to [`dispatch`],
//! which stores it in the matching [`Head`] field or in [`Head::extra`].

use chrono::{DateTime, FixedOffset};

use crate::classify::is_key_byte;
use crate::error::{Error, Result};
use crate::head::{Field, Head};

/// Store one head line into `head`.
///
/// `key` is matched case-insensitively. On error `head` may hold earlier
/// fields; callers discard it.
pub fn dispatch(head: &mut Head, key: &str, value: String) -> Result<()> {
    let Some(field) = Field::from_key(key) else {
        let key = key.to_ascii_lowercase();
        tracing::trace!(%key, "Storing unrecognized head key");
        head.extra.insert(key, value);
        return Ok(());
    };

    tracing::trace!(%field, "Storing head field");
    match field {
        Field::Title => head.title = Some(value),
        Field::UrlId => {
            validate_url_id(&value)?;
            head.urlid = Some(value);
        }
        Field::Overview => head.overview = Some(value),
        Field::Category => head.category = Some(value),
        Field::Tags => head.tags.extend(split_tags(&value)),
        Field::Image => head.image = Some(value),
        Field::Lang => head.lang = Some(value),
        Field::PublishedAt => head.published_at = Some(parse_timestamp(field, &value)?),
        Field::UpdatedAt => head.updated_at = Some(parse_timestamp(field, &value)?),
    }
    Ok(())
}

/// Check that a urlid holds only letters, digits, `_` and `-`.
///
/// # Example
/// ```
/// use mdhead::fields::validate_url_id;
///
/// assert_eq!(validate_url_id("test-title_2").unwrap(), "test-title_2");
/// assert!(validate_url_id("test title").is_err());
/// ```
pub fn validate_url_id(value: &str) -> Result<&str> {
    match value.char_indices().find(|(_, c)| !c.is_ascii() || !is_key_byte(*c as u8)) {
        Some((position, found)) => Err(Error::InvalidUrlId {
            value: value.to_string(),
            found,
            position,
        }),
        None => Ok(value),
    }
}

/// Split a `tags` value on `#`, trimming spaces and commas around each tag.
///
/// Empty segments are dropped; order is kept and duplicates are not removed.
///
/// # Example
/// ```
/// use mdhead::fields::split_tags;
///
/// assert_eq!(split_tags("#sample, #test, #parse"), vec!["sample", "test", "parse"]);
/// ```
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split('#')
        .map(|tag| tag.trim_matches(|c| c == ' ' || c == ','))
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Parse an RFC 3339 timestamp (`2020-09-06T12:23:00Z`), ignoring surrounding spaces.
pub fn parse_timestamp(field: Field, value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim_matches(' ');
    DateTime::parse_from_rfc3339(trimmed).map_err(|source| Error::InvalidTimestamp {
        field,
        value: trimmed.to_string(),
        source,
    })
}
