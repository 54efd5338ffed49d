// ============================================================================
// KeyShift - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含替换执行逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::error::KeyshiftError;
use crate::models::table::{Replacement, ReplacementTable, DEFAULT_REPLACEMENTS};

/// 配置文件名
pub const CONFIG_FILE: &str = "keyshift.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// KeyShift 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 文件路径配置
    #[serde(default)]
    pub paths: PathsConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
    /// 替换规则（为空时使用内置表）
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

/// 文件路径配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// 待迁移的源文件
    #[serde(default = "Config::default_source")]
    pub source: PathBuf,
    /// 待校验的语言文件
    #[serde(default = "Config::default_locale")]
    pub locale: PathBuf,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
    pub source: Option<PathBuf>,
    pub locale: Option<PathBuf>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 默认源文件
    fn default_source() -> PathBuf {
        PathBuf::from("src/pages/compositions/FormCompositionItem.tsx")
    }

    /// 默认语言文件
    fn default_locale() -> PathBuf {
        PathBuf::from("public/locales/pt/principal.json")
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置，`load_file` 为 false 时忽略磁盘上的配置文件
    pub fn initialize(load_file: bool) -> anyhow::Result<()> {
        let config = if load_file {
            Self::load_from(Path::new(CONFIG_FILE))?
        } else {
            Self::default()
        };
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_from(config_path: &Path) -> Result<Self, KeyshiftError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| KeyshiftError::read(config_path, e))?;
        toml::from_str(&content).map_err(|source| KeyshiftError::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// 将运行时参数覆盖到当前配置
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(source) = args.source {
            self.paths.source = source;
        }
        if let Some(locale) = args.locale {
            self.paths.locale = locale;
        }
    }

    /// 合并运行时参数到全局配置
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply(args);
        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板（写出内置替换表，便于编辑）
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();
        config.replacements = DEFAULT_REPLACEMENTS
            .iter()
            .map(|&(old, new)| Replacement::new(old, new))
            .collect();
        config
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::generate_default_template().save_to_file(config_path)
    }

    /// 构建当前配置的替换表
    pub fn replacement_table(&self) -> Result<ReplacementTable, KeyshiftError> {
        ReplacementTable::from_config(&self.replacements)
    }

    /// 获取全局配置快照
    pub fn snapshot() -> anyhow::Result<Config> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.clone())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::snapshot()?.i18n.language)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
            replacements: Vec::new(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: Config::default_source(),
            locale: Config::default_locale(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
