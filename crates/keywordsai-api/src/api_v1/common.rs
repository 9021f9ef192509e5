use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Where a list endpoint may have put its records.
///
/// List endpoints are not consistent about their envelope: some answer with
/// a bare array, others wrap it under `results`, `data` or a resource-named
/// key. Callers pass an ordered slice of candidates; the first one present
/// *as an array* wins, even when that array is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListExtractor {
    /// The response body itself is the array.
    BareArray,
    /// The array sits under this top-level key.
    Key(&'static str),
}

impl ListExtractor {
    fn extract(self, response: &Value) -> Option<&Vec<Value>> {
        match self {
            ListExtractor::BareArray => response.as_array(),
            ListExtractor::Key(key) => response.get(key).and_then(Value::as_array),
        }
    }
}

/// Candidates for `GET /prompts/`.
pub const PROMPT_LIST: &[ListExtractor] = &[
    ListExtractor::BareArray,
    ListExtractor::Key("results"),
    ListExtractor::Key("data"),
    ListExtractor::Key("prompts"),
];

/// Candidates for `GET /prompts/{id}/versions/` when listing versions.
pub const VERSION_LIST: &[ListExtractor] = &[
    ListExtractor::BareArray,
    ListExtractor::Key("results"),
    ListExtractor::Key("data"),
    ListExtractor::Key("versions"),
];

/// Candidates for `GET /prompts/{id}/versions/` when resolving `latest`
/// ahead of a variable lookup. Only the paginated `results` envelope is
/// recognised here.
pub const LATEST_VERSION_LOOKUP: &[ListExtractor] = &[ListExtractor::Key("results")];

/// Pull the record list out of `response` and decode every record.
///
/// A response matching none of the candidates yields an empty list. Records
/// that do not decode as `T` are skipped, so one odd entry never empties the
/// whole dropdown.
pub fn unwrap_list<T>(response: &Value, candidates: &[ListExtractor]) -> Vec<T>
where
    T: DeserializeOwned,
{
    let Some(records) = candidates.iter().find_map(|c| c.extract(response)) else {
        return Vec::new();
    };

    records
        .iter()
        .filter_map(|record| match T::deserialize(record) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                debug!(%record, error = %err, "skipping undecodable list record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ids(response: Value, candidates: &[ListExtractor]) -> Vec<i64> {
        unwrap_list(&response, candidates)
    }

    #[test]
    fn bare_array_is_used_directly() {
        assert_eq!(ids(json!([1, 2]), VERSION_LIST), vec![1, 2]);
    }

    #[test]
    fn keys_are_tried_in_order() {
        let response = json!({"versions": [3], "data": [2], "results": [1]});
        assert_eq!(ids(response.clone(), VERSION_LIST), vec![1]);
        assert_eq!(ids(json!({"versions": [3], "data": [2]}), VERSION_LIST), vec![2]);
        assert_eq!(ids(json!({"versions": [3]}), VERSION_LIST), vec![3]);
    }

    #[test]
    fn empty_array_still_wins() {
        assert!(ids(json!({"results": [], "data": [7]}), PROMPT_LIST).is_empty());
    }

    #[test]
    fn non_array_values_are_skipped() {
        assert_eq!(ids(json!({"results": null, "prompts": [4]}), PROMPT_LIST), vec![4]);
    }

    #[test]
    fn unknown_shape_is_an_empty_list() {
        assert!(ids(json!({"items": [1]}), PROMPT_LIST).is_empty());
        assert!(ids(json!("nope"), PROMPT_LIST).is_empty());
        assert!(ids(Value::Null, PROMPT_LIST).is_empty());
    }

    #[test]
    fn latest_lookup_only_reads_results() {
        assert!(ids(json!([1, 2]), LATEST_VERSION_LOOKUP).is_empty());
        assert!(ids(json!({"versions": [1, 2]}), LATEST_VERSION_LOOKUP).is_empty());
        assert_eq!(ids(json!({"results": [5]}), LATEST_VERSION_LOOKUP), vec![5]);
    }

    #[test]
    fn undecodable_records_are_skipped() {
        assert_eq!(ids(json!({"results": [1, "two", 3, null]}), PROMPT_LIST), vec![1, 3]);
    }
}
