use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::ClassService;
use crate::models::{ApiResponse, ResourceId, classes::requests::CreateClassRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_capacity, validate_name};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&class_data.name) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Some(capacity) = class_data.capacity
        && let Err(msg) = validate_capacity(capacity)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created with invite code {}", class.id, class.invite_code);
            Ok(HttpResponse::Created().json(ApiResponse::success(ResourceId { id: class.id })))
        }
        Err(e) => Ok(write_failure(
            &e,
            "Subject or teacher does not exist",
            "Failed to create class",
        )),
    }
}
