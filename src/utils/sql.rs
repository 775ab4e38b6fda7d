/// LIKE 转义字符，在各数据库的字符串字面量里都无需再转义
pub const LIKE_ESCAPE: char = '!';

/// 转义 LIKE 模式中的通配符，配合 `ESCAPE '!'` 使用
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 判断数据库错误信息是否为唯一约束或外键约束冲突
///
/// 覆盖 SQLite、PostgreSQL 与 MySQL 的错误文本。
pub fn is_constraint_violation(message: &str) -> bool {
    const MARKERS: [&str; 7] = [
        "UNIQUE constraint failed",
        "FOREIGN KEY constraint failed",
        "duplicate key",
        "violates foreign key constraint",
        "violates unique constraint",
        "Duplicate entry",
        "a foreign key constraint fails",
    ];
    MARKERS.iter().any(|marker| message.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("math"), "math");
        assert_eq!(escape_like_pattern("100%"), "100!%");
        assert_eq!(escape_like_pattern("a_b"), "a!_b");
        assert_eq!(escape_like_pattern("hi!"), "hi!!");
        assert_eq!(escape_like_pattern("c:\\"), "c:\\");
    }

    #[test]
    fn test_constraint_violation() {
        assert!(is_constraint_violation(
            "error returned from database: UNIQUE constraint failed: departments.code"
        ));
        assert!(is_constraint_violation(
            "error returned from database: FOREIGN KEY constraint failed"
        ));
        assert!(is_constraint_violation(
            "duplicate key value violates unique constraint \"subjects_code_key\""
        ));
        assert!(!is_constraint_violation("connection refused"));
    }
}
