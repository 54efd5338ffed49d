// ============================================================================
// KeyShift - 语言文件校验器
// ============================================================================
//
// 文件: src/core/validator.rs
// 职责: 检查 JSON 语言文件是否语法正确
// 边界:
//   - ✅ JSON 语法校验
//   - ✅ 区分解析错误与其他错误
//   - ❌ 不应检查语言文件的键结构
//   - ❌ 不应修改语言文件
//
// ============================================================================

use serde::de::IgnoredAny;
use std::fs;
use std::path::Path;

use crate::core::error::KeyshiftError;

/// JSON 校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// 解析失败，`detail` 带有行列信息
    Invalid { detail: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// 校验 JSON 文本，解析结果直接丢弃
pub fn validate_json_str(content: &str) -> ValidationResult {
    match serde_json::from_str::<IgnoredAny>(content) {
        Ok(_) => ValidationResult::Valid,
        Err(e) => ValidationResult::Invalid {
            detail: e.to_string(),
        },
    }
}

/// 读取并校验 JSON 文件
///
/// 只有解析错误会转成 [`ValidationResult::Invalid`]，读取失败（文件不存在、
/// 非 UTF-8 内容等）原样向上返回。
pub fn validate_json(path: &Path) -> Result<ValidationResult, KeyshiftError> {
    let content = fs::read_to_string(path).map_err(|e| KeyshiftError::read(path, e))?;
    let result = validate_json_str(&content);
    tracing::debug!(path = %path.display(), valid = result.is_valid(), "locale validated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_object() {
        assert_eq!(validate_json_str(r#"{"a": 1}"#), ValidationResult::Valid);
    }

    #[test]
    fn reports_truncated_object() {
        match validate_json_str(r#"{"a": 1"#) {
            ValidationResult::Invalid { detail } => assert!(detail.contains("line 1")),
            other => panic!("expected invalid, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_document() {
        assert!(!validate_json_str("").is_valid());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(!validate_json_str(r#"{"a": 1} x"#).is_valid());
    }

    #[test]
    fn non_finite_number_literals_are_invalid() {
        assert!(!validate_json_str(r#"{"a": NaN}"#).is_valid());
        assert!(!validate_json_str(r#"{"a": Infinity}"#).is_valid());
        assert!(!validate_json_str(r#"{"a": -Infinity}"#).is_valid());
    }

    #[test]
    fn nested_locale_is_valid() {
        let locale = r#"{"compositions": {"compositionItem": {"select": "Selecionar"}}}"#;
        assert!(validate_json_str(locale).is_valid());
    }

    #[test]
    fn invalid_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("principal.json");
        fs::write(&path, r#"{"a": 1"#).unwrap();
        assert!(!validate_json(&path).unwrap().is_valid());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_json(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, KeyshiftError::Read { .. }));
    }

    #[test]
    fn non_utf8_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        fs::write(&path, [b'{', b'"', 0xE9, b'"', b':', b'1', b'}']).unwrap();
        assert!(validate_json(&path).is_err());
    }
}
