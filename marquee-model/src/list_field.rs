//! Decoding of list-valued detail fields.
//!
//! The catalogue stores genres, actors and directors as a JSON array
//! serialized into a single string column. Anything that does not decode
//! to an array of strings renders as an empty list.

/// Decode an optional JSON-encoded list of strings, preserving order.
///
/// Never fails: missing, blank or malformed input yields an empty vector.
pub fn decode_list_field(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_list_keeps_element_order() {
        assert_eq!(
            decode_list_field(Some(r#"["Drama","Comedy"]"#)),
            vec!["Drama".to_string(), "Comedy".to_string()]
        );
    }

    #[test]
    fn malformed_input_degrades_to_empty() {
        assert!(decode_list_field(Some("not json")).is_empty());
        assert!(decode_list_field(Some(r#"{"a":1}"#)).is_empty());
        assert!(decode_list_field(Some("[1,2]")).is_empty());
        assert!(decode_list_field(Some("   ")).is_empty());
        assert!(decode_list_field(None).is_empty());
    }

    #[test]
    fn empty_array_is_empty() {
        assert!(decode_list_field(Some("[]")).is_empty());
    }
}
