//! 质量加分计算
use std::collections::BTreeSet;

use crate::matcher::normalize;
use crate::rule::core::BonusRule;

/// 加分结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusResolution {
    /// 截断后的总分
    pub total: u32,
    /// 截断前的原始累加值（日志/调试用）
    pub raw_total: u32,
    pub applied: Vec<String>,
}

/// 按原始厂商名计算加分（内部做大小写/标点归一化）
pub fn resolve_bonus(
    tags: &BTreeSet<String>,
    manufacturer: &str,
    bonus_rules: &[BonusRule],
    max_bonus: Option<u32>,
) -> BonusResolution {
    resolve_bonus_normalized(tags, &normalize(manufacturer), bonus_rules, max_bonus)
}

/// 标签命中且厂商匹配（或通配）的规则分值累加，再按上限截断
pub(crate) fn resolve_bonus_normalized(
    tags: &BTreeSet<String>,
    normalized_manufacturer: &str,
    bonus_rules: &[BonusRule],
    max_bonus: Option<u32>,
) -> BonusResolution {
    let mut resolution = BonusResolution::default();
    if tags.is_empty() {
        return resolution;
    }

    for rule in bonus_rules {
        if tags.contains(&rule.required_tag) && rule.manufacturer.accepts(normalized_manufacturer) {
            log::trace!(
                "Bonus rule [{}] fired -> +{} (tag={}, manufacturer={})",
                rule.id,
                rule.bonus,
                rule.required_tag,
                rule.manufacturer
            );
            resolution.raw_total = resolution.raw_total.saturating_add(rule.bonus);
            resolution.applied.push(rule.id.clone());
        }
    }

    resolution.total = match max_bonus {
        Some(cap) => resolution.raw_total.min(cap),
        None => resolution.raw_total,
    };
    resolution
}
