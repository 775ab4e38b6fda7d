pub mod classes;
pub mod departments;
pub mod subjects;
pub mod users;

pub use classes::ClassService;
pub use departments::DepartmentService;
pub use subjects::SubjectService;
pub use users::UserService;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::error;
use ts_rs::TS;

use crate::errors::ClassroomError;
use crate::models::{ErrorResponse, PaginatedResponse};
use crate::storage::Storage;

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

// 从 app_data 取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not found in app data");
            actix_web::error::ErrorInternalServerError("Storage not configured")
        })
}

// 列表响应：{ data, pagination }，并附带总数响应头
pub(crate) fn list_response<T: Serialize + TS>(response: PaginatedResponse<T>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, response.pagination.total.to_string()))
        .json(response)
}

pub(crate) fn error_response(
    status: actix_web::http::StatusCode,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}

// 写操作失败：约束冲突返回 409，其余只返回通用信息
pub(crate) fn write_failure(err: &ClassroomError, conflict: &str, generic: &str) -> HttpResponse {
    if err.is_conflict() {
        HttpResponse::Conflict().json(ErrorResponse::new(conflict))
    } else {
        error!("{}: {}", generic, err);
        HttpResponse::InternalServerError().json(ErrorResponse::new(generic))
    }
}
