// ============================================================================
// KeyShift - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 界面文案的国际化支持
// 边界:
//   - ✅ 翻译表查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

/// 按语言查找翻译表
fn table_for(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    }
}

/// 在指定语言中查找翻译文本
pub fn lookup(language: &str, key: &str) -> String {
    table_for(language)
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    // 配置未初始化时回退到英文
    let language = crate::models::config::Config::get_language()
        .unwrap_or_else(|_| "en_us".to_string());
    lookup(&language, key)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 依次替换模板中的 `{}` 占位符
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template.as_str();
    let mut args = args.into_iter();
    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else { break };
        result.push_str(&rest[..pos]);
        result.push_str(&arg);
        rest = &rest[pos + 2..];
    }
    result.push_str(rest);
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}
