use serde::{Deserialize, Deserializer};

/// 区分“字段缺省”与“显式 null”
///
/// 配合 `#[serde(default, deserialize_with = "nullable")]` 使用：
/// 缺省为 `None`，`null` 为 `Some(None)`，有值为 `Some(Some(v))`。
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        teacher_id: Option<Option<i64>>,
    }

    #[test]
    fn test_missing_null_and_value() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.teacher_id, None);

        let cleared: Patch = serde_json::from_str(r#"{"teacher_id": null}"#).unwrap();
        assert_eq!(cleared.teacher_id, Some(None));

        let set: Patch = serde_json::from_str(r#"{"teacher_id": 3}"#).unwrap();
        assert_eq!(set.teacher_id, Some(Some(3)));
    }
}
