use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 统一的成功响应结构：{ "data": ... }
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub data: T,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

// 统一的错误响应结构：{ "error": "..." }
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// 创建/删除成功后仅返回资源 ID
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ResourceId {
    pub id: i64,
}
