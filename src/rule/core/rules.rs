//! 校验通过后的规则结构（运行时使用，不可变）

use regex::Regex;
use rustc_hash::FxHashSet;

use super::{ManufacturerMatch, MatchField};
use crate::matcher::KeywordMatcher;

/// 标签规则
#[derive(Debug, Clone)]
pub struct TagRule {
    pub id: String,
    pub tag: String,
    /// 关键字匹配器，至少一个命中才可能输出标签
    pub keywords: Vec<KeywordMatcher>,
    /// 正则约束：非空时还需至少一个正则命中（收窄关键字命中，不单独触发）
    pub patterns: Vec<Regex>,
    pub match_fields: Vec<MatchField>,
    /// 归一化后的厂商限定集合，空表示不限
    pub manufacturers: FxHashSet<String>,
    pub priority: i32,
}

impl TagRule {
    /// 厂商限定检查
    #[inline(always)]
    pub fn accepts_manufacturer(&self, normalized_manufacturer: &str) -> bool {
        self.manufacturers.is_empty() || self.manufacturers.contains(normalized_manufacturer)
    }
}

/// 组合推荐规则：依赖标签全部存在（AND）时输出 bundle
#[derive(Debug, Clone)]
pub struct BundleRule {
    pub id: String,
    pub bundle: String,
    pub required_tags: Vec<String>,
}

/// 质量加分规则
#[derive(Debug, Clone)]
pub struct BonusRule {
    pub id: String,
    pub required_tag: String,
    pub manufacturer: ManufacturerMatch,
    pub bonus: u32,
}
