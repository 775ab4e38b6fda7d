use std::collections::HashMap;

use super::Pagination;

/// 列表请求：分页窗口加上原始查询参数
///
/// 过滤参数保持原样，交给存储层按实体白名单解析。
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub pagination: Pagination,
    pub params: HashMap<String, String>,
}

impl ListQuery {
    pub fn from_params(params: HashMap<String, String>) -> Self {
        Self {
            pagination: Pagination::from_params(&params),
            params,
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_params_reads_window() {
        let query = ListQuery::from_params(HashMap::from([
            ("page".to_string(), "3".to_string()),
            ("search".to_string(), "math".to_string()),
        ]));
        assert_eq!(query.pagination, Pagination::new(3, 10));
        assert_eq!(query.params.get("search").map(String::as_str), Some("math"));
    }
}
