use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Cover image substituted into listing cards when a record has none.
pub const DEFAULT_COVER: &str = "https://picsum.photos/1440/1080";
/// Author recorded when a draft names none.
pub const DEFAULT_AUTHOR: &str = "anonymous";
/// Category recorded when a draft names none.
pub const DEFAULT_CATEGORY: &str = "uncategorized";
/// Title shown for drifted records that lost theirs.
pub const DEFAULT_TITLE: &str = "untitled";
/// Maximum number of characters taken from `content` for a derived summary.
pub const SUMMARY_CHARS: usize = 100;

/// A complete, normalized blog post record.
///
/// This is the shape stored under `post_<id>` and returned by the
/// single-post endpoint. Every field is populated by
/// [`PostDraft::normalize`] except `cover`, which stays absent when the
/// author never set one; the listing projection substitutes
/// [`DEFAULT_COVER`] instead of inventing a cover on the record itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub create_time: String,
    pub update_time: String,
    pub author: String,
    pub category: String,
}

impl Post {
    /// Project this record into its listing card.
    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            cover: self
                .cover
                .clone()
                .unwrap_or_else(|| DEFAULT_COVER.to_string()),
            create_time: self.create_time.clone(),
            update_time: self.update_time.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" ({})", self.id, self.title, self.category)
    }
}

/// The listing projection of a post: card fields only, no `content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub cover: String,
    pub create_time: String,
    pub update_time: String,
    pub author: String,
    pub category: String,
}

/// Incoming or stored post data with every field optional.
///
/// Doubles as the POST body shape and as the tolerant decoding target for
/// stored records, so drifted records (missing fields, unknown extras)
/// still normalize instead of failing. The `author` field carries the
/// fixed alias table (`Author`, `authur`) observed in historical clients;
/// aliasing happens here, once, at the boundary. An `id` may arrive as a
/// JSON string or number and is coerced to a string either way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    #[serde(
        default,
        deserialize_with = "id_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(
        alias = "Author",
        alias = "authur",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PostDraft {
    /// Normalize into a complete [`Post`].
    ///
    /// The single defaulting point in the system: save writes through this,
    /// and both read paths decode through it, so every consumer sees the
    /// same field rules. `fallback_id` is used when the draft carries no id
    /// of its own (e.g. a record looked up by key). Empty strings count as
    /// absent.
    pub fn normalize(self, fallback_id: &str) -> Post {
        let content = non_empty(self.content).unwrap_or_default();
        let summary = non_empty(self.summary).unwrap_or_else(|| summary_of(&content));
        let create_time = non_empty(self.create_time).unwrap_or_default();
        let update_time = non_empty(self.update_time).unwrap_or_else(|| create_time.clone());
        Post {
            id: non_empty(self.id).unwrap_or_else(|| fallback_id.to_string()),
            title: non_empty(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            content,
            summary,
            cover: non_empty(self.cover),
            create_time,
            update_time,
            author: non_empty(self.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category: non_empty(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

/// First [`SUMMARY_CHARS`] characters of `content`.
pub fn summary_of(content: &str) -> String {
    content.chars().take(SUMMARY_CHARS).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(Raw::Str(s)) => Some(s),
        Some(Raw::Num(n)) => Some(n.to_string()),
    })
}
