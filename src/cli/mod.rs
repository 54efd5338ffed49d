// ============================================================================
// KeyShift - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod init;
pub mod migrate;
pub mod run;
pub mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use init::{handle_init, InitArgs};
use migrate::{handle_migrate, MigrateArgs};
use run::{run, RunArgs};
use validate::handle_validate;

/// KeyShift - one-shot translation key migration
#[derive(Debug, Parser)]
#[command(name = "keyshift")]
#[command(about = "Move translation keys into a new namespace and check the locale file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Source file to migrate
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Locale JSON file to validate
    #[arg(short = 'j', long, global = true)]
    pub locale: Option<PathBuf>,

    /// Commands (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Migrate keys, then validate the locale file
    Run(RunArgs),
    /// Migrate keys in the source file only
    Migrate(MigrateArgs),
    /// Validate the locale file only
    Validate,
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let mut cli = Cli::parse();
    let command = resolve_command(cli.command.take());

    // init must work even when the existing keyshift.toml is malformed
    Config::initialize(command.reads_config_file())?;
    Config::merge_runtime_args(build_runtime_args(&cli))?;

    let config = Config::snapshot()?;
    Colors::set_enabled(config.output.colored);
    Logger::init_tracing(config.output.verbose);

    match command {
        Commands::Run(args) => run(args),
        Commands::Migrate(args) => handle_migrate(args),
        Commands::Validate => handle_validate(),
        Commands::Init(args) => handle_init(args),
    }
}

/// No subcommand means the full migrate + validate run
fn resolve_command(command: Option<Commands>) -> Commands {
    command.unwrap_or_else(|| Commands::Run(RunArgs::default()))
}

impl Commands {
    /// Whether keyshift.toml is loaded before dispatch
    fn reads_config_file(&self) -> bool {
        !matches!(self, Commands::Init(_))
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
        source: cli.source.clone(),
        locale: cli.locale.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["keyshift"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "keyshift",
            "migrate",
            "--dry-run",
            "--source",
            "a.tsx",
            "--no-color",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Migrate(MigrateArgs { dry_run: true }))));

        let args = build_runtime_args(&cli);
        assert_eq!(args.source, Some(PathBuf::from("a.tsx")));
        assert_eq!(args.colored, Some(false));
        assert_eq!(args.verbose, None);
        assert_eq!(args.locale, None);
    }

    #[test]
    fn bare_invocation_routes_to_run() {
        let cli = Cli::try_parse_from(["keyshift", "--source", "a.tsx"]).unwrap();
        let command = resolve_command(cli.command);
        assert!(matches!(command, Commands::Run(RunArgs { dry_run: false })));
        assert!(command.reads_config_file());
    }

    #[test]
    fn explicit_subcommand_is_kept() {
        let cli = Cli::try_parse_from(["keyshift", "validate"]).unwrap();
        assert!(matches!(resolve_command(cli.command), Commands::Validate));
    }

    #[test]
    fn init_skips_config_file() {
        let cli = Cli::try_parse_from(["keyshift", "init", "--force"]).unwrap();
        let command = resolve_command(cli.command);
        assert!(matches!(&command, Commands::Init(InitArgs { force: true, .. })));
        assert!(!command.reads_config_file());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
