use super::entities::SubjectListItem;
use crate::models::common::PaginatedResponse;

// 课程列表响应
pub type SubjectListResponse = PaginatedResponse<SubjectListItem>;
