use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::departments::entities::Department;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub department_id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 列表行：嵌套所属院系
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub subject: Subject,
    pub department: Option<Department>,
}
