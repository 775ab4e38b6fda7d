use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::error;

use super::ClassService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(class))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "Class not found")),
        Err(e) => {
            error!("GET /classes/{} error: {}", class_id, e);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch class",
            ))
        }
    }
}
