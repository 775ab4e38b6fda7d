use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::SubjectService;
use crate::models::{ApiResponse, subjects::requests::UpdateSubjectRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_code, validate_name};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Some(code) = &update_data.code
        && let Err(msg) = validate_code(code)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(subject))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "Subject not found")),
        Err(e) => Ok(write_failure(
            &e,
            "Subject code already exists or department does not exist",
            "Failed to update subject",
        )),
    }
}
