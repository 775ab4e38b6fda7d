use super::entities::ClassStatus;
use crate::models::common::nullable;
use serde::Deserialize;
use ts_rs::TS;

pub const DEFAULT_CAPACITY: i32 = 50;

// 创建班级请求
//
// 请求体中的 inviteCode 不会被读取，邀请码总是由服务端生成。
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub description: Option<String>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub capacity: Option<i32>,
    pub status: Option<ClassStatus>,
    pub banner_url: Option<String>,
    // 缺省为 []
    pub schedules: Option<Vec<serde_json::Value>>,
}

// 更新班级请求，邀请码不可修改
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    // 缺省表示不修改，显式的 null 表示解除关联
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub subject_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub teacher_id: Option<Option<i64>>,
    pub capacity: Option<i32>,
    pub status: Option<ClassStatus>,
    pub banner_url: Option<String>,
    pub schedules: Option<Vec<serde_json::Value>>,
}
