//! Serialized cache state in the shape the client query library hydrates from

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cache::QueryCache;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub data: Value,
    /// Milliseconds since the Unix epoch
    pub data_updated_at: i64,
    pub data_update_count: u32,
    pub error: Option<Value>,
    pub error_updated_at: i64,
    pub error_update_count: u32,
    pub fetch_failure_count: u32,
    pub fetch_meta: Option<Value>,
    pub is_fetching: bool,
    pub is_invalidated: bool,
    pub is_paused: bool,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedQuery {
    pub query_key: String,
    pub query_hash: String,
    pub state: QueryState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DehydratedState {
    pub mutations: Vec<Value>,
    pub queries: Vec<DehydratedQuery>,
}

impl DehydratedState {
    /// Data stored under `key`, if the query was dehydrated
    pub fn query_data(&self, key: &str) -> Option<&Value> {
        self.queries
            .iter()
            .find(|q| q.query_key == key)
            .map(|q| &q.state.data)
    }

    /// JSON that can sit inside a `<script>` element without ending it early
    pub fn to_script_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        let mut out = String::with_capacity(json.len());
        for c in json.chars() {
            match c {
                '<' => out.push_str("\\u003c"),
                '>' => out.push_str("\\u003e"),
                '&' => out.push_str("\\u0026"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                c => out.push(c),
            }
        }
        Ok(out)
    }
}

/// Hash of a single-key query, matching the client's stable key hashing
fn query_hash(key: &str) -> String {
    Value::Array(vec![Value::from(key)]).to_string()
}

/// Snapshot every successful query in the cache
pub fn dehydrate(cache: &QueryCache) -> DehydratedState {
    let queries = cache
        .iter()
        .map(|(key, query)| DehydratedQuery {
            query_key: key.clone(),
            query_hash: query_hash(key),
            state: QueryState {
                data: query.data.clone(),
                data_updated_at: query.updated_at.timestamp_millis(),
                data_update_count: query.update_count,
                error: None,
                error_updated_at: 0,
                error_update_count: 0,
                fetch_failure_count: 0,
                fetch_meta: None,
                is_fetching: false,
                is_invalidated: false,
                is_paused: false,
                status: "success".to_string(),
            },
        })
        .collect();

    DehydratedState {
        mutations: Vec::new(),
        queries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_empty_cache_dehydrates_to_empty_state() {
        let state = dehydrate(&QueryCache::new());
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"mutations": [], "queries": []})
        );
    }

    #[test]
    fn test_user_query_shape() {
        let mut cache = QueryCache::new();
        let at = Utc.with_ymd_and_hms(2021, 8, 1, 0, 0, 0).unwrap();
        cache.set_query_data_at("user", json!({"id": "u-1"}), at);

        let value = serde_json::to_value(dehydrate(&cache)).unwrap();
        let query = &value["queries"][0];
        assert_eq!(query["queryKey"], "user");
        assert_eq!(query["queryHash"], "[\"user\"]");
        assert_eq!(query["state"]["data"], json!({"id": "u-1"}));
        assert_eq!(query["state"]["dataUpdatedAt"], at.timestamp_millis());
        assert_eq!(query["state"]["dataUpdateCount"], 1);
        assert_eq!(query["state"]["status"], "success");
        assert!(query["state"]["error"].is_null());
        assert!(query["state"]["fetchMeta"].is_null());
    }

    #[test]
    fn test_queries_are_ordered_by_key() {
        let mut cache = QueryCache::new();
        cache.set_query_data("user", json!(1));
        cache.set_query_data("appointments", json!(2));

        let keys: Vec<_> = dehydrate(&cache)
            .queries
            .into_iter()
            .map(|q| q.query_key)
            .collect();
        assert_eq!(keys, vec!["appointments", "user"]);
    }

    #[test]
    fn test_script_json_escapes_gt_and_paragraph_separator() {
        let mut cache = QueryCache::new();
        cache.set_query_data("user", json!({"name": "a>b\u{2029}c"}));

        let out = dehydrate(&cache).to_script_json().unwrap();
        assert!(!out.contains('>'));
        assert!(!out.contains('\u{2029}'));
        assert!(out.contains("a\\u003eb\\u2029c"));

        let back: DehydratedState = serde_json::from_str(&out).unwrap();
        assert_eq!(back.query_data("user"), Some(&json!({"name": "a>b\u{2029}c"})));
    }

    #[test]
    fn test_script_json_cannot_close_the_script_tag() {
        let mut cache = QueryCache::new();
        cache.set_query_data("user", json!({"name": "</script><b>&\u{2028}"}));

        let out = dehydrate(&cache).to_script_json().unwrap();
        assert!(!out.contains("</script>"));
        assert!(!out.contains('<'));
        assert!(!out.contains('&'));
        assert!(!out.contains('\u{2028}'));

        // Escapes are plain JSON and decode back to the original data
        let back: DehydratedState = serde_json::from_str(&out).unwrap();
        assert_eq!(
            back.query_data("user"),
            Some(&json!({"name": "</script><b>&\u{2028}"}))
        );
    }
}
