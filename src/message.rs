// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug)]
pub struct ChatRequest {
    pub query: String,
}

impl ChatRequest {
    /// Decode a raw request body. Anything that isn't a JSON object with a
    /// string `query` yields an empty query.
    pub fn from_body(body: &[u8]) -> Self {
        let query = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map
                .get("query")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Ok(_) => String::new(),
            Err(err) => {
                if !body.is_empty() {
                    tracing::debug!(error = %err, "chat body is not valid JSON, using empty query");
                }
                String::new()
            }
        };

        Self { query }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_query_field() {
        let req = ChatRequest::from_body(br#"{"query": "crop advice"}"#);
        assert_eq!(req.query, "crop advice");
    }

    #[test]
    fn missing_or_malformed_body_is_empty() {
        assert_eq!(ChatRequest::from_body(b"").query, "");
        assert_eq!(ChatRequest::from_body(b"{not json").query, "");
        assert_eq!(ChatRequest::from_body(b"null").query, "");
        assert_eq!(ChatRequest::from_body(br#"["crop"]"#).query, "");
        assert_eq!(ChatRequest::from_body(br#"{"message": "crop"}"#).query, "");
    }

    #[test]
    fn non_string_query_is_empty() {
        assert_eq!(ChatRequest::from_body(br#"{"query": 42}"#).query, "");
        assert_eq!(ChatRequest::from_body(br#"{"query": null}"#).query, "");
    }
}
