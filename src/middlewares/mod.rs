pub mod rate_limit;
pub mod require_jwt;
pub mod require_role;

pub use rate_limit::{RateLimit, RateLimiter};
pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::ErrorResponse;

// 辅助函数：创建 `{ error }` 错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ErrorResponse::new(message))
}
