use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::ClassService;
use crate::models::{ApiResponse, classes::requests::UpdateClassRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_capacity, validate_name};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Some(capacity) = update_data.capacity
        && let Err(msg) = validate_capacity(capacity)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(class))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "Class not found")),
        Err(e) => Ok(write_failure(
            &e,
            "Subject or teacher does not exist",
            "Failed to update class",
        )),
    }
}
