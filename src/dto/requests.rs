use crate::errors::{ApiError, POST_ID_MISSING};
use validator::Validate;

/// Query string of the likes endpoint: `?postId=...`
#[derive(Debug, Default, Validate)]
pub struct LikesQuery {
    #[validate(length(min = 1, message = "postId is missing"))]
    pub post_id: Option<String>,
}

impl LikesQuery {
    #[cfg(test)]
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id.into()),
        }
    }

    /// Builds the query from decoded `key=value` pairs. When `postId` is
    /// repeated the first value wins.
    pub fn from_params(params: Vec<(String, String)>) -> Self {
        let post_id = params
            .into_iter()
            .find(|(key, _)| key == "postId")
            .map(|(_, value)| value);

        Self { post_id }
    }

    /// The validated `postId`. Absent and empty values are both rejected.
    pub fn post_id(&self) -> Result<&str, ApiError> {
        self.validate()
            .map_err(|_| ApiError::ValidationError(POST_ID_MISSING.into()))?;

        self.post_id
            .as_deref()
            .ok_or_else(|| ApiError::ValidationError(POST_ID_MISSING.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accepts_non_empty_post_id() {
        assert_eq!(LikesQuery::new("p1").post_id().unwrap(), "p1");
    }

    #[test]
    fn rejects_missing_or_empty_post_id() {
        for query in [LikesQuery::default(), LikesQuery::new("")] {
            match query.post_id() {
                Err(ApiError::ValidationError(msg)) => assert_eq!(msg, POST_ID_MISSING),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn repeated_post_id_keeps_first_value() {
        let query = LikesQuery::from_params(params(&[
            ("utm", "x"),
            ("postId", "a"),
            ("postId", "b"),
        ]));
        assert_eq!(query.post_id().unwrap(), "a");
    }

    #[test]
    fn other_params_are_ignored() {
        let query = LikesQuery::from_params(params(&[("postid", "a"), ("id", "b")]));
        assert!(query.post_id().is_err());
    }
}
