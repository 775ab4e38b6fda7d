use serde::Deserialize;
use ts_rs::TS;

// 创建院系请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct CreateDepartmentRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

// 更新院系请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct UpdateDepartmentRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}
