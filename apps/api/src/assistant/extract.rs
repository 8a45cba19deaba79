//! Tolerant extraction of JSON embedded in free-form completions.
//!
//! The service is asked for pure JSON but not guaranteed to comply: it may
//! prepend prose or wrap the value in commentary. The scan takes the
//! outermost span for the expected bracket kind and parses that span.
//! Failure degrades the result shape; it never fails the call.

use serde::de::DeserializeOwned;

/// Outermost `{...}` span, or None when the text has no such span.
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Outermost `[...]` span.
fn array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Parses the outermost object span as `T`. `None` means the caller should
/// fall back to the raw text.
pub fn extract_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_str(object_span(text)?).ok()
}

/// Parses the outermost array span, defaulting to empty on any failure.
/// An array expectation never becomes an error.
pub fn extract_array<T: DeserializeOwned>(text: &str) -> Vec<T> {
    array_span(text)
        .and_then(|span| serde_json::from_str(span).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_object_with_leading_prose_is_extracted() {
        let text = r#"Here you go: {"fit_score": 7, "matching_skills": ["Editing"]}"#;

        let value: Value = extract_object(text).expect("object expected");

        assert_eq!(value["fit_score"], 7);
        assert_eq!(value["matching_skills"][0], "Editing");
    }

    #[test]
    fn test_object_with_surrounding_commentary_is_extracted() {
        let text = "Sure! Here is the JSON you asked for:\n{\"a\": 1}\nLet me know if you need more.";

        let value: Value = extract_object(text).expect("object expected");

        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_nested_objects_use_the_outermost_span() {
        let text = r#"{"outer": {"inner": true}}"#;

        let value: Value = extract_object(text).expect("object expected");

        assert_eq!(value["outer"]["inner"], true);
    }

    #[test]
    fn test_no_object_span_returns_none() {
        assert!(extract_object::<Value>("no json here at all").is_none());
    }

    #[test]
    fn test_malformed_object_returns_none() {
        assert!(extract_object::<Value>("prefix {\"broken\": } suffix").is_none());
    }

    #[test]
    fn test_array_with_prose_is_extracted() {
        let text = "New skills identified:\n[\"Subtitle QA\", \"Terminology management\"]";

        let skills: Vec<String> = extract_array(text);

        assert_eq!(skills, vec!["Subtitle QA", "Terminology management"]);
    }

    #[test]
    fn test_no_array_span_yields_empty_vec() {
        let skills: Vec<String> = extract_array("I could not find any new skills.");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_malformed_array_yields_empty_vec() {
        let skills: Vec<String> = extract_array("prefix [\"a\", ] suffix");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_unterminated_array_yields_empty_vec() {
        let skills: Vec<String> = extract_array("[\"unterminated\", ");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_empty_array_stays_empty() {
        let skills: Vec<String> = extract_array("Nothing new: []");
        assert!(skills.is_empty());
    }
}
