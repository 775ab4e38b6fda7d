use chrono::{DateTime, Utc};

// 数据库中统一存储毫秒时间戳
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_round_trip() {
        let now = now_millis();
        assert_eq!(from_millis(now).timestamp_millis(), now);
    }
}
