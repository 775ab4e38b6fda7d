use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::error;

use super::SubjectService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_subject(
    service: &SubjectService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_subject_by_id(id).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "Subject not found")),
        Err(e) => {
            error!("GET /subjects/{} error: {}", id, e);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch subject",
            ))
        }
    }
}
