use super::entities::ClassListItem;
use crate::models::common::PaginatedResponse;

// 班级列表响应
pub type ClassListResponse = PaginatedResponse<ClassListItem>;
