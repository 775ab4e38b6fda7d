//! 索引式过滤描述符解析
//!
//! 请求形如 `filters[0][field]=name&filters[0][operator]=contains&filters[0][value]=Bio`。

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

static FILTER_FIELD_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^filters\[(\d+)\]\[field\]$").expect("Invalid filter key regex")
});

/// 支持的比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// 不区分大小写的子串匹配
    Contains,
    /// 精确相等
    Eq,
}

impl std::str::FromStr for FilterOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(FilterOperator::Contains),
            "eq" => Ok(FilterOperator::Eq),
            _ => Err(format!("Unsupported filter operator: {s}")),
        }
    }
}

/// 一条完整的过滤描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub index: u64,
    pub field: String,
    /// 原始运算符文本，未知运算符在构建谓词时被忽略
    pub operator: Option<String>,
    pub value: String,
}

impl FilterDescriptor {
    pub fn operator(&self) -> Option<FilterOperator> {
        self.operator.as_deref().and_then(|op| op.parse().ok())
    }
}

/// 从查询参数中按索引升序提取描述符
///
/// `field` 缺失或为空、`value` 缺失的描述符会被跳过；不匹配的键名被忽略。
pub fn parse_indexed_filters(params: &HashMap<String, String>) -> Vec<FilterDescriptor> {
    // (数值索引, 原始索引文本)，保证按数值升序且 "01" 与 "1" 互不覆盖
    let indices: BTreeSet<(u64, &str)> = params
        .keys()
        .filter_map(|key| {
            let raw = FILTER_FIELD_KEY_RE.captures(key)?.get(1)?.as_str();
            raw.parse::<u64>().ok().map(|index| (index, raw))
        })
        .collect();

    indices
        .into_iter()
        .filter_map(|(index, raw)| {
            let field = params.get(&format!("filters[{raw}][field]"))?;
            if field.is_empty() {
                return None;
            }
            let value = params.get(&format!("filters[{raw}][value]"))?;
            Some(FilterDescriptor {
                index,
                field: field.clone(),
                operator: params.get(&format!("filters[{raw}][operator]")).cloned(),
                value: value.clone(),
            })
        })
        .collect()
}
