pub mod list_query;
pub mod nullable;
pub mod pagination;
pub mod response;

pub use list_query::ListQuery;
pub use nullable::nullable;
pub use pagination::{PaginatedResponse, Pagination, PaginationInfo};
pub use response::{ApiResponse, ErrorResponse, ResourceId};
