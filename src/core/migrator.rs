// ============================================================================
// KeyShift - 翻译键迁移器
// ============================================================================
//
// 文件: src/core/migrator.rs
// 职责: 对源文件执行有序的字面量替换并写回
// 边界:
//   - ✅ 内存缓冲区替换
//   - ✅ 替换统计
//   - ✅ 源文件读取和写回
//   - ❌ 不应包含替换表定义
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含结果输出格式化
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::KeyshiftError;
use crate::models::table::ReplacementTable;

/// 单条规则的命中统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementStat {
    pub old: String,
    pub new: String,
    pub count: usize,
}

/// 迁移结果汇总
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub stats: Vec<ReplacementStat>,
}

impl MigrationReport {
    /// 替换总次数
    pub fn total(&self) -> usize {
        self.stats.iter().map(|s| s.count).sum()
    }

    pub fn changed(&self) -> bool {
        self.total() > 0
    }

    /// 至少命中一次的规则
    pub fn hits(&self) -> impl Iterator<Item = &ReplacementStat> {
        self.stats.iter().filter(|s| s.count > 0)
    }
}

/// 一次文件迁移的结果
#[derive(Debug, Clone)]
pub struct MigrationOutcome {
    pub path: PathBuf,
    pub content: String,
    pub report: MigrationReport,
    pub written: bool,
}

/// 按表顺序替换所有不重叠的匹配，每条规则作用于上一条的输出
pub fn apply_replacements(text: &str, table: &ReplacementTable) -> (String, MigrationReport) {
    let mut buffer = text.to_string();
    let mut report = MigrationReport::default();

    for entry in table.entries() {
        let count = buffer.matches(entry.old.as_str()).count();
        if count > 0 {
            buffer = buffer.replace(entry.old.as_str(), &entry.new);
        }
        tracing::debug!(old = %entry.old, new = %entry.new, count, "applied replacement");
        report.stats.push(ReplacementStat {
            old: entry.old.clone(),
            new: entry.new.clone(),
            count,
        });
    }

    (buffer, report)
}

/// 键迁移器
pub struct KeyMigrator {
    table: ReplacementTable,
    dry_run: bool,
}

impl KeyMigrator {
    pub fn new(table: ReplacementTable) -> Self {
        Self {
            table,
            dry_run: false,
        }
    }

    /// 预演模式: 只计算结果，不写回文件
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 读取源文件，执行替换并覆盖写回
    pub fn migrate(&self, source_path: &Path) -> Result<MigrationOutcome, KeyshiftError> {
        let original =
            fs::read_to_string(source_path).map_err(|e| KeyshiftError::read(source_path, e))?;

        let (content, report) = apply_replacements(&original, &self.table);

        let written = if self.dry_run {
            false
        } else {
            fs::write(source_path, &content).map_err(|e| KeyshiftError::write(source_path, e))?;
            true
        };

        tracing::debug!(
            path = %source_path.display(),
            total = report.total(),
            written,
            "migration finished"
        );

        Ok(MigrationOutcome {
            path: source_path.to_path_buf(),
            content,
            report,
            written,
        })
    }
}
