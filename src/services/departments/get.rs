use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::error;

use super::DepartmentService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_department(
    service: &DepartmentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_department_by_id(id).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "Department not found")),
        Err(e) => {
            error!("GET /departments/{} error: {}", id, e);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch department",
            ))
        }
    }
}
