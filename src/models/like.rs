use serde::{Deserialize, Serialize};

/// One row of the `postlikes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    #[serde(rename = "postId")]
    pub post_id: String,
    pub count: u64,
}

impl LikeRecord {
    /// A record for a post liked for the first time.
    pub fn first_like(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
            count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_store_column_names() {
        let record = LikeRecord::first_like("p1");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, serde_json::json!({ "postId": "p1", "count": 1 }));
    }

    #[test]
    fn rejects_negative_count() {
        let parsed = serde_json::from_str::<LikeRecord>(r#"{"postId":"p1","count":-1}"#);
        assert!(parsed.is_err());
    }
}
