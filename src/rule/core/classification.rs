//! 分类结果结构

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 分类结果
/// 与输入商品无所有权关系，每次解析独立生成
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub tags: BTreeSet<String>,
    pub bundles: BTreeSet<String>,
    pub quality_bonus: u32,
    /// 命中的规则ID（标签规则按优先级排序，其后为组合规则、加分规则）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_rules: Vec<String>,
}

impl ClassificationResult {
    /// 无任何命中
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.bundles.is_empty() && self.quality_bonus == 0
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn has_bundle(&self, bundle: &str) -> bool {
        self.bundles.contains(bundle)
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tags={:?} bundles={:?} bonus={}",
            self.tags, self.bundles, self.quality_bonus
        )
    }
}
