use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::UserService;
use crate::models::{ApiResponse, users::requests::UpdateUserRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_email, validate_name};

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }
    if let Some(email) = &update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user))),
        Ok(None) => Ok(error_response(StatusCode::NOT_FOUND, "User not found")),
        Err(e) => Ok(write_failure(&e, "Email already exists", "Failed to update user")),
    }
}
