use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::DepartmentService;
use crate::models::{ApiResponse, ResourceId};
use crate::services::{error_response, write_failure};

pub async fn delete_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_department(department_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ResourceId { id: department_id })))
        }
        Ok(false) => Ok(error_response(StatusCode::NOT_FOUND, "Department not found")),
        // 仍有课程引用该院系
        Err(e) => Ok(write_failure(
            &e,
            "Department still has subjects",
            "Failed to delete department",
        )),
    }
}
