use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::SubjectService;
use crate::models::{ApiResponse, ResourceId};
use crate::services::{error_response, write_failure};

pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ResourceId { id: subject_id })))
        }
        Ok(false) => Ok(error_response(StatusCode::NOT_FOUND, "Subject not found")),
        Err(e) => Ok(write_failure(
            &e,
            "Subject is still referenced",
            "Failed to delete subject",
        )),
    }
}
