use once_cell::sync::Lazy;
use regex::Regex;

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid code regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_CODE_LEN: usize = 50;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err("Name must be at most 255 characters");
    }
    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), &'static str> {
    // 编码长度校验：1 <= x <= 50
    if code.is_empty() || code.len() > MAX_CODE_LEN {
        return Err("Code length must be between 1 and 50 characters");
    }
    // 编码格式校验：只能包含字母、数字、下划线或连字符
    if !CODE_RE.is_match(code) {
        return Err("Code must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_capacity(capacity: i32) -> Result<(), &'static str> {
    if capacity < 1 {
        return Err("Capacity must be at least 1");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert!(validate_name("Biology 101").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_code() {
        assert!(validate_code("CS-101").is_ok());
        assert!(validate_code("").is_err());
        assert!(validate_code("CS 101").is_err());
        assert!(validate_code(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("not an email").is_err());
    }

    #[test]
    fn test_capacity() {
        assert!(validate_capacity(30).is_ok());
        assert!(validate_capacity(0).is_err());
    }
}
