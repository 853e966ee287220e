//! 规则校验器：原始规则 → 运行时规则
//! 结构性错误直接返回（引擎不得带着非法规则集启动）
//! 引用类问题只产生告警（规则可能提前配置、等待标签来源上线）
use rustc_hash::FxHashSet;

use super::warning::{ConfigWarning, ValidationStats};
use crate::error::{RulesError, RulesResult};
use crate::matcher::{compile_pattern, normalize, KeywordMatcher};
use crate::rule::core::{
    BonusRule, BundleRule, ManufacturerMatch, MatchField, RawBonusRule, RawBundleRule, RawTagRule,
    RuleDefinition, TagRule, RULE_FILE_VERSION,
};

/// 校验产物
#[derive(Debug, Clone, Default)]
pub struct ValidatedRules {
    pub tag_rules: Vec<TagRule>,
    pub bundle_rules: Vec<BundleRule>,
    pub bonus_rules: Vec<BonusRule>,
    pub warnings: Vec<ConfigWarning>,
    pub stats: ValidationStats,
}

/// 规则校验器
#[derive(Debug, Clone)]
pub struct RuleValidator {
    default_match_fields: Vec<MatchField>,
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self {
            default_match_fields: MatchField::default_fields(),
        }
    }
}

impl RuleValidator {
    pub fn new(default_match_fields: Vec<MatchField>) -> Self {
        if default_match_fields.is_empty() {
            return Self::default();
        }
        Self {
            default_match_fields: dedup_fields(default_match_fields),
        }
    }

    /// 校验整个规则文件
    pub fn validate(&self, definition: &RuleDefinition) -> RulesResult<ValidatedRules> {
        if definition.version != RULE_FILE_VERSION {
            return Err(RulesError::UnsupportedVersion(definition.version));
        }

        let mut out = ValidatedRules::default();
        // 规则ID跨三类规则全局唯一
        let mut seen_ids: FxHashSet<String> = FxHashSet::default();

        for (index, raw) in definition.tag_rules.iter().enumerate() {
            let id = check_id(&raw.id, "tag_rules", index, &mut seen_ids)?;
            let rule = self.validate_tag_rule(id, raw, &mut out.stats)?;
            out.tag_rules.push(rule);
        }
        for (index, raw) in definition.bundle_rules.iter().enumerate() {
            let id = check_id(&raw.id, "bundle_rules", index, &mut seen_ids)?;
            out.bundle_rules.push(validate_bundle_rule(id, raw)?);
        }
        for (index, raw) in definition.bonus_rules.iter().enumerate() {
            let id = check_id(&raw.id, "bonus_rules", index, &mut seen_ids)?;
            out.bonus_rules.push(validate_bonus_rule(id, raw)?);
        }

        out.warnings = collect_reference_warnings(&out.tag_rules, &out.bundle_rules, &out.bonus_rules);
        for warning in &out.warnings {
            log::warn!("Rule configuration warning: {}", warning);
        }

        out.stats.tag_rules = out.tag_rules.len() as u32;
        out.stats.bundle_rules = out.bundle_rules.len() as u32;
        out.stats.bonus_rules = out.bonus_rules.len() as u32;
        out.stats.warnings = out.warnings.len() as u32;
        Ok(out)
    }

    fn validate_tag_rule(
        &self,
        id: String,
        raw: &RawTagRule,
        stats: &mut ValidationStats,
    ) -> RulesResult<TagRule> {
        let tag = raw.tag.trim();
        if tag.is_empty() {
            return Err(RulesError::MissingField { rule: id, field: "tag" });
        }

        // 关键字：归一化后去重，归一化为空的关键字不计入
        let mut keywords = Vec::with_capacity(raw.keywords.len());
        let mut seen_keywords: FxHashSet<String> = FxHashSet::default();
        for keyword in &raw.keywords {
            let normalized = normalize(keyword);
            if normalized.is_empty() {
                log::debug!("Tag rule [{}] drops keyword `{}` (empty after normalization)", id, keyword);
                continue;
            }
            if !seen_keywords.insert(normalized) {
                stats.merged_keywords += 1;
                continue;
            }
            if let Some(matcher) = KeywordMatcher::keyword(keyword) {
                keywords.push(matcher);
                stats.keyword_matchers += 1;
            }
        }
        if keywords.is_empty() {
            return Err(RulesError::EmptyKeywords(id));
        }

        // 正则只作为附加约束，必须与关键字同时成立
        let mut patterns = Vec::with_capacity(raw.patterns.len());
        for pattern in &raw.patterns {
            let pattern = pattern.trim();
            if pattern.is_empty() {
                // 空正则会匹配任意文本，直接忽略
                log::warn!("Tag rule [{}] ignores a blank pattern", id);
                continue;
            }
            let regex = compile_pattern(pattern).map_err(|source| RulesError::InvalidPattern {
                rule: id.clone(),
                source,
            })?;
            patterns.push(regex);
            stats.pattern_matchers += 1;
        }

        let match_fields = match &raw.match_fields {
            Some(fields) if !fields.is_empty() => dedup_fields(fields.clone()),
            _ => self.default_match_fields.clone(),
        };

        let manufacturers = raw
            .manufacturers
            .iter()
            .map(|m| normalize(m))
            .filter(|m| !m.is_empty())
            .collect();

        Ok(TagRule {
            id,
            tag: tag.to_string(),
            keywords,
            patterns,
            match_fields,
            manufacturers,
            priority: raw.priority,
        })
    }
}

/// ID 必填且全局唯一
fn check_id(
    id: &str,
    section: &str,
    index: usize,
    seen: &mut FxHashSet<String>,
) -> RulesResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RulesError::MissingField {
            rule: format!("{}[{}]", section, index),
            field: "id",
        });
    }
    if !seen.insert(id.to_string()) {
        return Err(RulesError::DuplicateRuleId(id.to_string()));
    }
    Ok(id.to_string())
}

fn validate_bundle_rule(id: String, raw: &RawBundleRule) -> RulesResult<BundleRule> {
    let bundle = raw.bundle.trim();
    if bundle.is_empty() {
        return Err(RulesError::MissingField { rule: id, field: "bundle" });
    }

    let mut required_tags: Vec<String> = Vec::with_capacity(raw.required_tags.len());
    for tag in raw.required_tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !required_tags.iter().any(|existing| existing == tag) {
            required_tags.push(tag.to_string());
        }
    }
    if required_tags.is_empty() {
        return Err(RulesError::EmptyRequiredTags(id));
    }

    Ok(BundleRule {
        id,
        bundle: bundle.to_string(),
        required_tags,
    })
}

fn validate_bonus_rule(id: String, raw: &RawBonusRule) -> RulesResult<BonusRule> {
    let required_tag = raw.required_tag.trim();
    if required_tag.is_empty() {
        return Err(RulesError::MissingField { rule: id, field: "required_tag" });
    }

    let manufacturer = raw.manufacturer.trim();
    let manufacturer = if manufacturer == ManufacturerMatch::WILDCARD {
        ManufacturerMatch::Any
    } else {
        let normalized = normalize(manufacturer);
        if normalized.is_empty() {
            return Err(RulesError::MissingField { rule: id, field: "manufacturer" });
        }
        ManufacturerMatch::Exact(normalized)
    };

    if raw.bonus < 0 {
        return Err(RulesError::NegativeBonus { rule: id, bonus: raw.bonus });
    }
    let bonus = u32::try_from(raw.bonus).unwrap_or(u32::MAX);

    Ok(BonusRule {
        id,
        required_tag: required_tag.to_string(),
        manufacturer,
        bonus,
    })
}

/// 引用检查：依赖的标签必须能被某条标签规则产生
fn collect_reference_warnings(
    tag_rules: &[TagRule],
    bundle_rules: &[BundleRule],
    bonus_rules: &[BonusRule],
) -> Vec<ConfigWarning> {
    let producible: FxHashSet<&str> = tag_rules.iter().map(|r| r.tag.as_str()).collect();
    let mut warnings = Vec::new();

    for rule in bundle_rules {
        for tag in &rule.required_tags {
            if !producible.contains(tag.as_str()) {
                warnings.push(ConfigWarning::UnknownBundleTag {
                    rule: rule.id.clone(),
                    tag: tag.clone(),
                });
            }
        }
    }
    for rule in bonus_rules {
        if !producible.contains(rule.required_tag.as_str()) {
            warnings.push(ConfigWarning::UnknownBonusTag {
                rule: rule.id.clone(),
                tag: rule.required_tag.clone(),
            });
        }
    }
    warnings
}

fn dedup_fields(fields: Vec<MatchField>) -> Vec<MatchField> {
    let mut out = Vec::with_capacity(fields.len());
    for field in fields {
        if !out.contains(&field) {
            out.push(field);
        }
    }
    out
}
