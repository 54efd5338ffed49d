// ============================================================================
// KeyShift - CLI Validate 命令
// ============================================================================
//
// 文件: src/cli/validate.rs
// 职责: 语言文件 JSON 校验命令的 CLI 接口层
// 边界:
//   - ✅ 调用核心校验器
//   - ✅ 校验结果输出
//   - ❌ 不应包含 JSON 解析逻辑
//
// ============================================================================

use anyhow::Result;

use crate::core::{validate_json, ValidationResult};
use crate::models::config::Config;
use crate::utils::logger::Logger;
use crate::{t, tf};

pub fn handle_validate() -> Result<()> {
    let config = Config::snapshot()?;
    validate_locale(&config)?;
    Ok(())
}

/// 校验语言文件；解析失败只输出诊断，不视为错误
pub fn validate_locale(config: &Config) -> Result<ValidationResult> {
    let locale = &config.paths.locale;

    if config.output.verbose {
        Logger::info(tf!("validate.start", locale.display()));
    }

    let result = validate_json(locale)?;
    match &result {
        ValidationResult::Valid => Logger::success(t!("validate.valid")),
        ValidationResult::Invalid { detail } => Logger::warn(tf!("validate.invalid", detail)),
    }

    Ok(result)
}
