// ============================================================================
// KeyShift - CLI Migrate 命令
// ============================================================================
//
// 文件: src/cli/migrate.rs
// 职责: 翻译键迁移命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用核心迁移器并输出结果
//   - ✅ 链式替换风险提示
//   - ❌ 不应包含具体替换逻辑
//   - ❌ 不应包含替换表定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::{KeyMigrator, MigrationOutcome};
use crate::models::config::Config;
use crate::models::table::ReplacementTable;
use crate::utils::logger::Logger;
use crate::tf;

/// 迁移源文件中的翻译键
#[derive(Debug, Args, Default)]
pub struct MigrateArgs {
    /// 只统计替换，不写回文件（预演模式）
    #[arg(long)]
    pub dry_run: bool,
}

pub fn handle_migrate(args: MigrateArgs) -> Result<()> {
    let config = Config::snapshot()?;
    migrate_source(&config, args.dry_run)?;
    Ok(())
}

/// 按配置迁移源文件并输出状态行
pub fn migrate_source(config: &Config, dry_run: bool) -> Result<MigrationOutcome> {
    let verbose = config.output.verbose;
    let source = &config.paths.source;

    let table = config.replacement_table()?;
    warn_chained_pairs(&table);

    if verbose {
        Logger::info(tf!("migrate.start", source.display()));
    }

    let outcome = KeyMigrator::new(table).with_dry_run(dry_run).migrate(source)?;

    if verbose {
        for stat in outcome.report.hits() {
            Logger::detail(tf!("migrate.hit", stat.old, stat.count, stat.new));
        }
        Logger::info(tf!(
            "migrate.total",
            outcome.report.total(),
            outcome.report.hits().count()
        ));
    }

    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    if outcome.written {
        Logger::success(tf!("migrate.success", file_name));
    } else {
        Logger::info(tf!("migrate.dry_run", file_name, outcome.report.total()));
    }

    Ok(outcome)
}

/// 顺序替换语义保持不变，只提示可能的二次替换
fn warn_chained_pairs(table: &ReplacementTable) {
    let entries = table.entries();
    for pair in table.chained_pairs() {
        Logger::warn(tf!(
            "migrate.chained_warning",
            pair.earlier + 1,
            pair.later + 1,
            entries[pair.later].old
        ));
    }
}
