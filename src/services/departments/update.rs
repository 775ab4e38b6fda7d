use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::DepartmentService;
use crate::models::{ApiResponse, departments::requests::UpdateDepartmentRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_code, validate_name};

pub async fn update_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
    update_data: UpdateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(code) = &update_data.code
        && let Err(msg) = validate_code(code)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_department(department_id, update_data).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(department))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "Department not found")),
        Err(e) => Ok(write_failure(
            &e,
            "Department code already exists",
            "Failed to update department",
        )),
    }
}
