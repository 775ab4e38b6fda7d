use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ResourceId};
use crate::services::error_response;

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_class(class_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(ResourceId { id: class_id }))),
        Ok(false) => Ok(error_response(StatusCode::NOT_FOUND, "Class not found")),
        Err(e) => {
            error!("DELETE /classes/{} error: {}", class_id, e);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete class",
            ))
        }
    }
}
