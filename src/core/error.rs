// ============================================================================
// KeyShift - 错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 迁移与校验过程中的领域错误定义
// 边界:
//   - ✅ 错误枚举定义
//   - ✅ 错误上下文（路径、模式）
//   - ❌ 不应包含错误输出逻辑
//   - ❌ 不应包含恢复逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyshiftError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("replacement pattern must not be empty")]
    EmptyPattern,

    #[error("duplicate replacement pattern: {0}")]
    DuplicatePattern(String),

    #[error("invalid config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl KeyshiftError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
