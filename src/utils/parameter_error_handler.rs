use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::info;

use crate::models::ErrorResponse;

// JSON 请求体解析失败时返回 400 `{ error }`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    info!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid request body: {err}"
    )));
    InternalError::from_response(err, response).into()
}

// 查询参数解析失败时返回 400 `{ error }`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    info!("Rejected query for {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid query parameters: {err}"
    )));
    InternalError::from_response(err, response).into()
}
