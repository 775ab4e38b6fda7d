use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::subjects::entities::Subject;
use crate::models::users::entities::User;

// 班级状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum ClassStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

impl ClassStatus {
    pub const ACTIVE: &'static str = "active";
    pub const INACTIVE: &'static str = "inactive";
    pub const ARCHIVED: &'static str = "archived";

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Active => ClassStatus::ACTIVE,
            ClassStatus::Inactive => ClassStatus::INACTIVE,
            ClassStatus::Archived => ClassStatus::ARCHIVED,
        }
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ClassStatus::ACTIVE => Ok(ClassStatus::Active),
            ClassStatus::INACTIVE => Ok(ClassStatus::Inactive),
            ClassStatus::ARCHIVED => Ok(ClassStatus::Archived),
            _ => Err(format!("Invalid class status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 所属课程（课程被删除后为空）
    pub subject_id: Option<i64>,
    // 授课教师
    pub teacher_id: Option<i64>,
    // 班级名称
    pub name: String,
    // 班级描述
    pub description: Option<String>,
    // 邀请码，由服务端生成
    pub invite_code: String,
    // 容量
    pub capacity: i32,
    pub status: ClassStatus,
    pub banner_url: Option<String>,
    // 课表，原样存取
    pub schedules: Vec<serde_json::Value>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 列表行：班级字段平铺，关联的课程和教师嵌套
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub subject: Option<Subject>,
    pub teacher: Option<User>,
}
