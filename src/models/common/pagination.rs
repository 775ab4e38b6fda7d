use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// 归一化后的分页窗口
///
/// `page` 与 `limit` 始终 >= 1。无法解析或为负的输入会被钳制为 1，而不是报错。
/// 不限制 `limit` 的上限。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// 从原始查询参数构建（缺省 page=1, limit=10）
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.map_or(DEFAULT_PAGE, coerce_positive),
            limit.map_or(DEFAULT_LIMIT, coerce_positive),
        )
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self::from_raw(
            params.get("page").map(String::as_str),
            params.get("limit").map(String::as_str),
        )
    }

    /// 跳过的行数：(page - 1) * limit
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// 总页数：ceil(total / limit)，total 为 0 时为 0
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }

    pub fn info(&self, total: u64) -> PaginationInfo {
        PaginationInfo {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: self.total_pages(total),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

// 将请求中的字符串强制转换为 >= 1 的整数，小数截断
fn coerce_positive(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return value.max(1) as u64;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => {
            if value >= u64::MAX as f64 {
                u64::MAX
            } else {
                value.trunc() as u64
            }
        }
        _ => 1,
    }
}

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Pagination::from_raw(None, None);
        assert_eq!(p, Pagination { page: 1, limit: 10 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_offset_formula() {
        for page in 1..=5u64 {
            for limit in [1u64, 7, 10, 25] {
                let p = Pagination::new(page, limit);
                assert_eq!(p.offset(), (page - 1) * limit);
            }
        }
    }

    #[test]
    fn test_invalid_inputs_clamp_to_one() {
        for raw in ["0", "-4", "abc", "", "NaN", "-0.5"] {
            let p = Pagination::from_raw(Some(raw), Some(raw));
            assert_eq!(p.page, 1, "page input {raw:?}");
            assert_eq!(p.limit, 1, "limit input {raw:?}");
        }
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let p = Pagination::from_raw(Some(" 3 "), Some("2.9"));
        assert_eq!(p.page, 3);
        assert_eq!(p.limit, 2);
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(1, 10);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(p.total_pages(25), 3);
    }

    #[test]
    fn test_huge_window_does_not_overflow() {
        let p = Pagination::from_raw(Some("99999999999999999999"), Some("99999999999999999999"));
        assert_eq!(p.offset(), u64::MAX);
    }

    #[test]
    fn test_info_serializes_camel_case() {
        let info = Pagination::new(2, 10).info(25);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "limit": 10, "total": 25, "totalPages": 3})
        );
    }

    #[test]
    fn test_from_params() {
        let params = HashMap::from([
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]);
        assert_eq!(Pagination::from_params(&params), Pagination::new(2, 5));
    }
}
