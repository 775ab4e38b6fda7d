//! 列表查询的谓词构建
//!
//! 请求中的过滤意图有两种形态：平铺参数（`search`、`role` 等）与索引式描述符
//! （`filters[i][field|operator|value]`）。两者产生的谓词全部以 AND 合并，
//! 字段到列的映射是每个实体的封闭枚举，白名单之外的内容不会成为谓词。

pub mod fields;
pub mod filters;

use std::collections::HashMap;

use sea_orm::sea_query::{BinOper, Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, Condition};

use crate::utils::sql::{LIKE_ESCAPE, escape_like_pattern};

pub use fields::{ClassFilterField, DepartmentFilterField, SubjectFilterField, UserFilterField};
pub use filters::{FilterDescriptor, FilterOperator, parse_indexed_filters};

/// 实体可过滤字段的封闭枚举
pub trait FilterField: Sized + Copy {
    /// 解析请求中的字段名，未知字段返回 `None`
    fn parse(field: &str) -> Option<Self>;

    /// 不支持的字段/运算符组合返回 `None`
    fn predicate(self, operator: FilterOperator, value: &str) -> Option<Condition>;

    /// 平铺形态的查询参数
    fn flat_predicates(params: &HashMap<String, String>) -> Vec<Condition>;
}

/// 不区分大小写的子串匹配：LOWER(col) LIKE LOWER('%needle%') ESCAPE '!'
///
/// 两侧用同一个数据库函数折叠大小写，需要匹配的文本保持原样传入。
pub fn contains_ci<C: ColumnTrait>(column: C, needle: &str) -> Condition {
    let pattern = format!("%{}%", escape_like_pattern(needle));
    let folded_pattern = Expr::expr(Func::lower(Expr::val(pattern)))
        .binary(BinOper::Escape, Expr::Constant(LIKE_ESCAPE.into()));
    Condition::all().add(
        Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
            .binary(BinOper::Like, folded_pattern),
    )
}

/// 多列子串匹配，任一列命中即可
pub fn contains_any<C: ColumnTrait>(columns: &[C], needle: &str) -> Condition {
    columns
        .iter()
        .fold(Condition::any(), |cond, column| {
            cond.add(contains_ci(*column, needle))
        })
}

pub fn equals<C: ColumnTrait>(column: C, value: &str) -> Condition {
    Condition::all().add(column.eq(value))
}

/// 取出非空的平铺参数值
pub fn flat_value<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// 索引式描述符经白名单解析后的谓词
pub fn indexed_predicates<F: FilterField>(params: &HashMap<String, String>) -> Vec<Condition> {
    parse_indexed_filters(params)
        .into_iter()
        .filter_map(|descriptor| {
            let field = F::parse(&descriptor.field)?;
            let operator = descriptor.operator()?;
            field.predicate(operator, &descriptor.value)
        })
        .collect()
}

/// 将全部谓词合并为一个 AND 条件，没有谓词时返回 `None`
pub fn conjunction(predicates: Vec<Condition>) -> Option<Condition> {
    if predicates.is_empty() {
        return None;
    }
    Some(
        predicates
            .into_iter()
            .fold(Condition::all(), |cond, predicate| cond.add(predicate)),
    )
}

/// 构建某个实体列表请求的完整过滤条件
pub fn build_filter<F: FilterField>(params: &HashMap<String, String>) -> Option<Condition> {
    let mut predicates = F::flat_predicates(params);
    predicates.extend(indexed_predicates::<F>(params));
    conjunction(predicates)
}
