// ============================================================================
// KeyShift - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 迁移相关
    ("migrate.start", "开始迁移翻译键: {}"),
    ("migrate.success", "{} 翻译键更新成功!"),
    ("migrate.dry_run", "预演模式: {} 将执行 {} 次替换"),
    ("migrate.total", "共替换 {} 处，涉及 {} 条规则"),
    ("migrate.hit", "{} x{} -> {}"),
    (
        "migrate.chained_warning",
        "第 {} 条规则的结果包含第 {} 条规则的模式 ({})，会被再次替换",
    ),
    // 校验相关
    ("validate.start", "开始校验语言文件: {}"),
    ("validate.valid", "JSON 文件有效!"),
    ("validate.invalid", "JSON 校验错误: {}"),
    // 错误信息
    ("error.failed", "{}"),
    // 初始化相关
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.existing_invalid", "已有配置文件无法解析: {}"),
    ("init.use_force_hint", "使用 --force 以内置模板替换该文件"),
    ("init.replaced_invalid", "已替换无法解析的配置文件: {}"),
    ("init.config_created", "配置文件已创建: {} (共 {} 条 [[replacements]])"),
    ("init.create_failed", "创建配置文件失败: {}"),
    (
        "init.next_steps",
        "可以编辑 [[replacements]] 条目来描述自己的键迁移",
    ),
];
