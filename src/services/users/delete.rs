use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::UserService;
use crate::models::{ApiResponse, ResourceId};
use crate::services::{error_response, write_failure};

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_user(user_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(ResourceId { id: user_id }))),
        Ok(false) => Ok(error_response(StatusCode::NOT_FOUND, "User not found")),
        Err(e) => Ok(write_failure(&e, "User is still referenced", "Failed to delete user")),
    }
}
