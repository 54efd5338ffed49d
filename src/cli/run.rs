// ============================================================================
// KeyShift - CLI Run 命令
// ============================================================================
//
// 文件: src/cli/run.rs
// 职责: 默认流程: 先迁移源文件，再校验语言文件
// 边界:
//   - ✅ 两个步骤的顺序编排
//   - ❌ 不应包含具体迁移或校验逻辑
//   - ❌ 不应包含回滚逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::migrate::migrate_source;
use super::validate::validate_locale;
use crate::core::{MigrationOutcome, ValidationResult};
use crate::models::config::Config;

/// 迁移并校验
#[derive(Debug, Args, Default)]
pub struct RunArgs {
    /// 只统计替换，不写回文件（预演模式）
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = Config::snapshot()?;
    run_with(&config, args.dry_run)?;
    Ok(())
}

/// 两步互相独立: 校验失败不会撤销已写回的迁移
pub fn run_with(config: &Config, dry_run: bool) -> Result<(MigrationOutcome, ValidationResult)> {
    let outcome = migrate_source(config, dry_run)?;
    let validation = validate_locale(config)?;
    Ok((outcome, validation))
}
