//! 数据模型定义
//!
//! `entities` 为业务实体，`requests` 为请求体，`responses` 为响应体。
//! 对外 JSON 字段统一使用 camelCase。

pub mod classes;
pub mod common;
pub mod departments;
pub mod subjects;
pub mod users;

pub use common::{
    ApiResponse, ErrorResponse, ListQuery, PaginatedResponse, Pagination, PaginationInfo,
    ResourceId,
};
