use super::entities::Department;
use crate::models::common::PaginatedResponse;

// 院系列表响应
pub type DepartmentListResponse = PaginatedResponse<Department>;
