use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::DepartmentService;
use crate::models::{ApiResponse, ResourceId, departments::requests::CreateDepartmentRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_code, validate_name};

pub async fn create_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_data: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_code(&department_data.code) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Err(msg) = validate_name(&department_data.name) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_department(department_data).await {
        Ok(department) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(ResourceId { id: department.id }))),
        Err(e) => Ok(write_failure(
            &e,
            "Department code already exists",
            "Failed to create department",
        )),
    }
}
