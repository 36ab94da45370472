//! The decoded listing index.
//!
//! `post_list` is stored as a JSON array. Well-behaved writers only ever
//! append string ids, but the store does not enforce that, so the decoded
//! form keeps raw [`Value`]s and applies the historical comparison rules:
//! membership checks are exact string matches, removal string-coerces each
//! entry first, and the listing drops entries that coerce to nothing
//! useful. Non-string entries survive round trips untouched.

use serde_json::Value;

use crate::error::{PostError, PostResult};

/// The `post_list` array with its comparison rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostIndex {
    entries: Vec<Value>,
}

impl PostIndex {
    /// Decode the raw store value.
    ///
    /// An absent value decodes as an empty index, and so does a stored
    /// falsy scalar (JSON `null`, `false`, `0`, `""`), which readers have
    /// always treated the same as absent. Any other non-array shape is
    /// [`PostError::MalformedIndex`]; unparseable bytes are
    /// [`PostError::Internal`].
    pub fn decode(raw: Option<&str>) -> PostResult<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let value = serde_json::from_str::<Value>(raw)?;
        if is_falsy(&value) {
            return Ok(Self::default());
        }
        match value {
            Value::Array(entries) => Ok(Self { entries }),
            _ => Err(PostError::MalformedIndex),
        }
    }

    /// Serialize back to the stored JSON form.
    pub fn encode(&self) -> PostResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Exact-match membership test against string entries only.
    ///
    /// A numeric entry `1` does not count as containing `"1"`; save relies
    /// on this to decide whether to append, so a numeric duplicate gets a
    /// string sibling rather than suppressing the append.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|v| v.as_str() == Some(id))
    }

    /// Append `id` as a string entry.
    pub fn push(&mut self, id: &str) {
        self.entries.push(Value::String(id.to_string()));
    }

    /// Remove every entry whose string coercion equals `id`.
    ///
    /// Looser than [`contains`](Self::contains) on purpose: delete sweeps
    /// out numeric twins (`1` and `"1"`) in one pass.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|v| coerce_string(v) != id);
    }

    /// Ids worth resolving for the listing, in index order.
    ///
    /// Entries that are null, false, zero, or the empty string are
    /// skipped; the rest are string-coerced.
    pub fn listing_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|v| !is_falsy(v))
            .map(coerce_string)
            .collect()
    }

    /// Number of entries, including ones the listing would skip.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries, for drift inspection.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }
}

/// Whether a value counts as empty: `null`, `false`, zero, or `""`.
/// Shared by the index decoder and the stored-record decoder.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Loose string form of an entry. Scalars render as their bare text
/// (`null`, `true`, `7`); composite values fall back to compact JSON.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(raw: &str) -> PostIndex {
        PostIndex::decode(Some(raw)).unwrap()
    }

    // -----------------------------------------------------------------------
    // Decoding
    // -----------------------------------------------------------------------

    #[test]
    fn absent_value_decodes_empty() {
        let index = PostIndex::decode(None).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn array_value_decodes() {
        let index = decode(r#"["1","2"]"#);
        assert_eq!(index.len(), 2);
        assert!(index.contains("1"));
        assert!(index.contains("2"));
    }

    #[test]
    fn non_array_is_malformed() {
        for raw in [r#"{"0":"1"}"#, r#""not a list""#, "42", "true"] {
            let err = PostIndex::decode(Some(raw)).unwrap_err();
            assert!(matches!(err, PostError::MalformedIndex), "raw = {raw}");
        }
    }

    #[test]
    fn falsy_scalars_decode_empty() {
        for raw in ["null", "false", "0", r#""""#] {
            let index = PostIndex::decode(Some(raw)).unwrap();
            assert!(index.is_empty(), "raw = {raw}");
        }
    }

    #[test]
    fn unparseable_value_is_internal() {
        let err = PostIndex::decode(Some("[1,")).unwrap_err();
        assert!(matches!(err, PostError::Internal(_)));
    }

    // -----------------------------------------------------------------------
    // Membership and mutation
    // -----------------------------------------------------------------------

    #[test]
    fn contains_is_exact_on_strings() {
        let index = decode(r#"[1]"#);
        assert!(!index.contains("1"));
    }

    #[test]
    fn push_then_contains() {
        let mut index = PostIndex::default();
        index.push("a");
        assert!(index.contains("a"));
        assert!(!index.contains("b"));
    }

    #[test]
    fn remove_sweeps_coerced_twins() {
        let mut index = decode(r#"[1, "1", "2"]"#);
        index.remove("1");
        assert_eq!(index.entries(), &[json!("2")]);
    }

    #[test]
    fn remove_null_by_its_text() {
        let mut index = decode(r#"[null, "a"]"#);
        index.remove("null");
        assert_eq!(index.entries(), &[json!("a")]);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut index = decode(r#"["a","b"]"#);
        index.remove("c");
        assert_eq!(index.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Listing projection
    // -----------------------------------------------------------------------

    #[test]
    fn listing_drops_falsy_and_coerces_the_rest() {
        let index = decode(r#"[null, "", 0, false, "a", 7, true]"#);
        assert_eq!(index.listing_ids(), vec!["a", "7", "true"]);
    }

    #[test]
    fn listing_preserves_index_order() {
        let index = decode(r#"["c", "a", "b"]"#);
        assert_eq!(index.listing_ids(), vec!["c", "a", "b"]);
    }

    // -----------------------------------------------------------------------
    // Round trips
    // -----------------------------------------------------------------------

    #[test]
    fn encode_preserves_heterogeneous_entries() {
        let index = decode(r#"[1,"a",null]"#);
        assert_eq!(index.encode().unwrap(), r#"[1,"a",null]"#);
    }

    #[test]
    fn pushed_ids_encode_as_strings() {
        let mut index = decode("[1]");
        index.push("1");
        assert_eq!(index.encode().unwrap(), r#"[1,"1"]"#);
    }

    #[test]
    fn empty_index_encodes_as_empty_array() {
        assert_eq!(PostIndex::default().encode().unwrap(), "[]");
    }
}
