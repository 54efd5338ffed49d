// ============================================================================
// KeyShift - 替换表数据模型
// ============================================================================
//
// 文件: src/models/table.rs
// 职责: 翻译键替换表定义和校验
// 边界:
//   - ✅ 内置替换表定义
//   - ✅ 替换表构造和校验
//   - ✅ 链式替换风险检测
//   - ❌ 不应包含替换执行逻辑
//   - ❌ 不应包含文件读写逻辑
//   - ❌ 不应包含输出逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::error::KeyshiftError;

/// 内置替换表: compositionItem.* / composition.* 迁移到 compositions 命名空间
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    (
        r#"t("compositionItem.loadError")"#,
        r#"t("compositions.compositionItem.loadError")"#,
    ),
    (
        r#"t("compositionItem.descriptionRequired")"#,
        r#"t("compositions.compositionItem.descriptionRequired")"#,
    ),
    (
        r#"t("compositionItem.itemSaved")"#,
        r#"t("compositions.compositionItem.itemSaved")"#,
    ),
    (
        r#"t("compositionItem.saveError")"#,
        r#"t("compositions.compositionItem.saveError")"#,
    ),
    (
        r#"t("compositionItem.itemDeleted")"#,
        r#"t("compositions.compositionItem.itemDeleted")"#,
    ),
    (
        r#"t("compositionItem.deleteError")"#,
        r#"t("compositions.compositionItem.deleteError")"#,
    ),
    (
        r#"t("compositionItem.composition")"#,
        r#"t("compositions.compositionItem.composition")"#,
    ),
    (
        r#"t("compositionItem.rawMaterial")"#,
        r#"t("compositions.compositionItem.rawMaterial")"#,
    ),
    (
        r#"t("compositionItem.select")"#,
        r#"t("compositions.compositionItem.select")"#,
    ),
    (
        r#"t("compositionItem.description")"#,
        r#"t("compositions.compositionItem.description")"#,
    ),
    (
        r#"t("compositionItem.descriptionPlaceholder")"#,
        r#"t("compositions.compositionItem.descriptionPlaceholder")"#,
    ),
    (
        r#"t("compositionItem.quantity")"#,
        r#"t("compositions.compositionItem.quantity")"#,
    ),
    (
        r#"t("compositionItem.unit")"#,
        r#"t("compositions.compositionItem.unit")"#,
    ),
    (
        r#"t("compositionItem.costType")"#,
        r#"t("compositions.compositionItem.costType")"#,
    ),
    (
        r#"t("compositionItem.unitCost")"#,
        r#"t("compositions.compositionItem.unitCost")"#,
    ),
    (
        r#"t("compositionItem.totalCost")"#,
        r#"t("compositions.compositionItem.totalCost")"#,
    ),
    (
        r#"t("compositionItem.serviceCost")"#,
        r#"t("compositions.compositionItem.serviceCost")"#,
    ),
    (
        r#"t("compositionItem.percentage")"#,
        r#"t("compositions.compositionItem.percentage")"#,
    ),
    (
        r#"t("compositionItem.active")"#,
        r#"t("compositions.compositionItem.active")"#,
    ),
    (
        r#"t("compositionItem.newItem")"#,
        r#"t("compositions.compositionItem.newItem")"#,
    ),
    (
        r#"t("compositionItem.loadingItems")"#,
        r#"t("compositions.compositionItem.loadingItems")"#,
    ),
    (
        r#"t("compositionItem.noItems")"#,
        r#"t("compositions.compositionItem.noItems")"#,
    ),
    (
        "t(`compositionItem.costTypes.${type}`)",
        "t(`compositions.compositionItem.costTypes.${type}`)",
    ),
    // composition.* 归入 compositionDetails
    (
        r#"t("composition.confirmDelete")"#,
        r#"t("compositions.compositionDetails.confirmDelete")"#,
    ),
    (
        r#"t("composition.yes")"#,
        r#"t("compositions.compositionDetails.yes")"#,
    ),
    (
        r#"t("composition.no")"#,
        r#"t("compositions.compositionDetails.no")"#,
    ),
    (
        r#"t("composition.update")"#,
        r#"t("compositions.compositionDetails.update")"#,
    ),
    (
        r#"t("composition.save")"#,
        r#"t("compositions.compositionDetails.save")"#,
    ),
    (
        r#"t("composition.cancel")"#,
        r#"t("compositions.compositionDetails.cancel")"#,
    ),
    (
        r#"t("composition.actions")"#,
        r#"t("compositions.compositionDetails.actions")"#,
    ),
    (
        r#"t("composition.edit")"#,
        r#"t("compositions.compositionDetails.edit")"#,
    ),
    (
        r#"t("composition.delete")"#,
        r#"t("compositions.compositionDetails.delete")"#,
    ),
];

/// 单条替换规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// 待替换的原始字符串
    pub old: String,
    /// 替换后的字符串
    pub new: String,
}

impl Replacement {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// 有序替换表，构造后不可变
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

/// 链式替换: `earlier` 的新值包含 `later` 的原值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainedPair {
    pub earlier: usize,
    pub later: usize,
}

impl ReplacementTable {
    /// 构造替换表，拒绝空模式和重复模式
    pub fn new(entries: Vec<Replacement>) -> Result<Self, KeyshiftError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.old.is_empty() {
                return Err(KeyshiftError::EmptyPattern);
            }
            if !seen.insert(entry.old.as_str()) {
                return Err(KeyshiftError::DuplicatePattern(entry.old.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// 内置 composition 迁移表
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_REPLACEMENTS
                .iter()
                .map(|&(old, new)| Replacement::new(old, new))
                .collect(),
        }
    }

    /// 配置为空时回退到内置表
    pub fn from_config(entries: &[Replacement]) -> Result<Self, KeyshiftError> {
        if entries.is_empty() {
            Ok(Self::builtin())
        } else {
            Self::new(entries.to_vec())
        }
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 检测后续规则会改写前面规则产出的情况
    ///
    /// 替换按顺序作用于同一缓冲区，因此只有排在后面的规则才会命中前面规则写入的文本。
    pub fn chained_pairs(&self) -> Vec<ChainedPair> {
        let mut pairs = Vec::new();
        for (earlier, a) in self.entries.iter().enumerate() {
            for (offset, b) in self.entries[earlier + 1..].iter().enumerate() {
                if a.new.contains(&b.old) {
                    pairs.push(ChainedPair {
                        earlier,
                        later: earlier + 1 + offset,
                    });
                }
            }
        }
        pairs
    }
}
