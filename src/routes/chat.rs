use axum::{Json, body::Bytes};

use crate::{
    message::{ChatRequest, ChatResponse},
    services::chatbot::detect_topic,
};

// Takes raw bytes so a missing or broken body falls through to the
// fallback reply instead of a 4xx from the Json extractor.
pub async fn chat_handler(body: Bytes) -> Json<ChatResponse> {
    let payload = ChatRequest::from_body(&body);

    let topic = detect_topic(&payload.query);
    tracing::debug!(?topic, query_len = payload.query.len(), "chat reply selected");

    Json(ChatResponse {
        reply: topic.reply().to_string(),
    })
}
