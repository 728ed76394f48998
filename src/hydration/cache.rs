//! Server-side query cache

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::session::UserProfile;

/// Key the client reads the signed-in user from
pub const USER_QUERY_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CachedQuery {
    pub data: Value,
    pub updated_at: DateTime<Utc>,
    pub update_count: u32,
}

/// Per-request cache of query results, keyed by query key
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    queries: BTreeMap<String, CachedQuery>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store data under a query key, replacing what was there
    pub fn set_query_data(&mut self, key: impl Into<String>, data: Value) {
        self.set_query_data_at(key, data, Utc::now());
    }

    pub(crate) fn set_query_data_at(
        &mut self,
        key: impl Into<String>,
        data: Value,
        at: DateTime<Utc>,
    ) {
        let entry = self.queries.entry(key.into()).or_insert(CachedQuery {
            data: Value::Null,
            updated_at: at,
            update_count: 0,
        });
        entry.data = data;
        entry.updated_at = at;
        entry.update_count += 1;
    }

    pub fn get_query_data(&self, key: &str) -> Option<&Value> {
        self.queries.get(key).map(|q| &q.data)
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &CachedQuery)> {
        self.queries.iter()
    }
}

/// Build the cache handed to the client for this request.
///
/// Any parsed cookie is seeded, even one that does not sign the visitor in.
pub fn seed_from_session(profile: Option<&UserProfile>) -> QueryCache {
    let mut cache = QueryCache::new();
    if let Some(profile) = profile {
        cache.set_query_data(USER_QUERY_KEY, profile.to_value());
    }
    cache
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_without_session_is_empty() {
        let cache = seed_from_session(None);
        assert!(cache.is_empty());
        assert!(cache.get_query_data(USER_QUERY_KEY).is_none());
    }

    #[test]
    fn test_seed_with_session() {
        let profile = UserProfile::from_json(r#"{"id":"u-1","name":"Aminah"}"#).unwrap();
        let cache = seed_from_session(Some(&profile));
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get_query_data(USER_QUERY_KEY),
            Some(&json!({"id": "u-1", "name": "Aminah"}))
        );
    }

    #[test]
    fn test_seed_with_null_session() {
        let profile = UserProfile::from_json("null").unwrap();
        let cache = seed_from_session(Some(&profile));
        assert_eq!(cache.get_query_data(USER_QUERY_KEY), Some(&Value::Null));
    }

    #[test]
    fn test_set_query_data_replaces_and_counts() {
        let mut cache = QueryCache::new();
        cache.set_query_data("user", json!({"name": "a"}));
        cache.set_query_data("user", json!({"name": "b"}));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_query_data("user"), Some(&json!({"name": "b"})));
        let (_, entry) = cache.iter().next().unwrap();
        assert_eq!(entry.update_count, 2);
    }
}
