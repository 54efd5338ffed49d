// ============================================================================
// KeyShift - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 写出带内置替换表的 keyshift.toml 模板
// 边界:
//   - ✅ 模板写出（不依赖已加载的配置）
//   - ✅ 已有配置的可解析性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含替换逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::models::config::{Config, CONFIG_FILE};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// 覆盖已存在的配置文件（包括无法解析的文件）
    #[arg(short, long)]
    pub force: bool,
}

/// 模板写出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// 已写出模板
    Written {
        /// `[[replacements]]` 条目数
        entries: usize,
        /// 被覆盖的旧文件解析失败时的错误信息
        replaced_invalid: Option<String>,
    },
    /// 文件已存在且未指定 force
    Kept { invalid: Option<String> },
}

/// 已存在配置的解析错误（可解析时为 None）
fn parse_problem(path: &Path) -> Option<String> {
    Config::load_from(path)
        .err()
        .map(|e| format!("{:#}", anyhow::Error::from(e)))
}

/// 写出模板；已有文件只在 `force` 时覆盖，无论其能否解析
pub fn write_template(path: &Path, force: bool) -> Result<InitOutcome> {
    let existing_problem = if path.exists() {
        let problem = parse_problem(path);
        if !force {
            return Ok(InitOutcome::Kept { invalid: problem });
        }
        problem
    } else {
        None
    };

    let template = Config::generate_default_template();
    template
        .save_to_file(path)
        .with_context(|| tf!("init.create_failed", path.display()))?;

    Ok(InitOutcome::Written {
        entries: template.replacements.len(),
        replaced_invalid: existing_problem,
    })
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    match write_template(&args.config, args.force)? {
        InitOutcome::Written {
            entries,
            replaced_invalid,
        } => {
            if let Some(problem) = replaced_invalid {
                Logger::warn(tf!("init.replaced_invalid", problem));
            }
            Logger::success(tf!("init.config_created", args.config.display(), entries));
            Logger::info(t!("init.next_steps"));
        }
        InitOutcome::Kept { invalid } => {
            Logger::warn(tf!("init.config_exists", args.config.display()));
            if let Some(problem) = invalid {
                Logger::warn(tf!("init.existing_invalid", problem));
            }
            Logger::info(t!("init.use_force_hint"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::DEFAULT_REPLACEMENTS;
    use std::fs;

    #[test]
    fn writes_template_into_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let outcome = write_template(&path, false).unwrap();

        assert_eq!(
            outcome,
            InitOutcome::Written {
                entries: DEFAULT_REPLACEMENTS.len(),
                replaced_invalid: None,
            }
        );
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[[replacements]]"));
    }

    #[test]
    fn force_overwrites_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[paths\n").unwrap();

        let outcome = write_template(&path, true).unwrap();

        match outcome {
            InitOutcome::Written {
                replaced_invalid: Some(problem),
                ..
            } => assert!(problem.starts_with("invalid config")),
            other => panic!("expected overwrite of invalid config, got {other:?}"),
        }
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.replacements.len(), DEFAULT_REPLACEMENTS.len());
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[paths\n").unwrap();

        let outcome = write_template(&path, false).unwrap();

        assert!(matches!(outcome, InitOutcome::Kept { invalid: Some(_) }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[paths\n");
    }

    #[test]
    fn valid_existing_file_reports_no_problem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[output]\nverbose = true\n").unwrap();

        assert_eq!(
            write_template(&path, false).unwrap(),
            InitOutcome::Kept { invalid: None }
        );
    }
}
