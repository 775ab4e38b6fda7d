use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::UserService;
use crate::models::{ApiResponse, ResourceId, users::requests::CreateUserRequest};
use crate::services::{error_response, write_failure};
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    // 验证姓名
    if let Err(msg) = validate_name(&user_data.name) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(error_response(StatusCode::BAD_REQUEST, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_user(user_data).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(ResourceId { id: user.id }))),
        Err(e) => Ok(write_failure(&e, "Email already exists", "Failed to create user")),
    }
}
