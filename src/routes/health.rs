use axum::Json;

use crate::message::StatusResponse;

pub const STATUS_MESSAGE: &str = "✅ KrishiMitra API is running!";

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
    })
}
