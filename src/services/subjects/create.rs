use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::SubjectService;
use crate::models::{ApiResponse, ResourceId, subjects::requests::CreateSubjectRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_code, validate_name};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&subject_data.name) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Err(msg) = validate_code(&subject_data.code) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(ResourceId { id: subject.id })))
        }
        Err(e) => Ok(write_failure(
            &e,
            "Subject code already exists or department does not exist",
            "Failed to create subject",
        )),
    }
}
