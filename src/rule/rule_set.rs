//! 已校验、已编译的不可变规则集
//! 构建一次后只读，可通过 Arc 在任意线程间共享

use std::time::Instant;

use crate::config::EngineConfig;
use crate::error::{RulesError, RulesResult};
use crate::resolver::bonus::resolve_bonus_normalized;
use crate::resolver::bundle::resolve_bundles;
use crate::resolver::tag::resolve_tags_normalized;
use crate::resolver::NormalizedProduct;
use crate::rule::core::{BonusRule, BundleRule, ClassificationResult, Product, RuleDefinition, TagRule};
use crate::rule::loader::RuleLoader;
use crate::rule::validator::{ConfigWarning, RuleValidator, ValidationStats};
use crate::utils::{compress_label_set, preview_compact};

/// 规则集
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// 按 (priority, 声明顺序) 稳定排序
    tag_rules: Vec<TagRule>,
    bundle_rules: Vec<BundleRule>,
    bonus_rules: Vec<BonusRule>,
    max_bonus: Option<u32>,
    warnings: Vec<ConfigWarning>,
    stats: ValidationStats,
}

impl RuleSet {
    /// 从规则定义构建（校验 + 编译）
    pub fn from_definition(definition: &RuleDefinition, config: &EngineConfig) -> RulesResult<Self> {
        let start = Instant::now();
        let validator = RuleValidator::new(config.default_match_fields.clone());
        let validated = validator.validate(definition)?;

        if config.strict && !validated.warnings.is_empty() {
            return Err(RulesError::StrictValidation(
                validated.warnings.iter().map(ToString::to_string).collect(),
            ));
        }

        let mut tag_rules = validated.tag_rules;
        tag_rules.sort_by_key(|rule| rule.priority);

        let rule_set = Self {
            tag_rules,
            bundle_rules: validated.bundle_rules,
            bonus_rules: validated.bonus_rules,
            max_bonus: config.max_bonus.or(definition.max_bonus),
            warnings: validated.warnings,
            stats: validated.stats,
        };

        rule_set.stats.print_summary();
        log::info!(
            "Rule set built | Time: {}ms | tag={} bundle={} bonus={} | max_bonus={:?}",
            start.elapsed().as_millis(),
            rule_set.tag_rules.len(),
            rule_set.bundle_rules.len(),
            rule_set.bonus_rules.len(),
            rule_set.max_bonus,
        );
        Ok(rule_set)
    }

    /// 从 JSON 文本构建
    pub fn from_json(json: &str, config: &EngineConfig) -> RulesResult<Self> {
        let definition = RuleDefinition::from_json(json)?;
        Self::from_definition(&definition, config)
    }

    /// 按配置的规则来源加载并构建
    pub fn load(config: &EngineConfig) -> RulesResult<Self> {
        let definition = RuleLoader::new().load(config)?;
        Self::from_definition(&definition, config)
    }

    /// 异步加载并构建
    #[cfg(feature = "async-io")]
    pub async fn load_async(config: &EngineConfig) -> RulesResult<Self> {
        let definition = RuleLoader::new().load_async(config).await?;
        Self::from_definition(&definition, config)
    }

    /// 内置默认规则集
    #[cfg(feature = "embedded-rules")]
    pub fn embedded() -> RulesResult<Self> {
        Self::load(&EngineConfig::embedded())
    }

    /// 对单个商品分类
    /// 纯函数：只读规则集，不产生任何共享可变状态，永不失败
    pub fn resolve(&self, product: &Product) -> ClassificationResult {
        let normalized = NormalizedProduct::new(product);

        // 1. 标签（必须先完成，组合/加分消费完整标签集合）
        let tag_resolution = resolve_tags_normalized(&normalized, &self.tag_rules);
        // 2. 组合推荐 / 质量加分，二者互不依赖
        let bundle_resolution = resolve_bundles(&tag_resolution.tags, &self.bundle_rules);
        let bonus_resolution = resolve_bonus_normalized(
            &tag_resolution.tags,
            &normalized.manufacturer,
            &self.bonus_rules,
            self.max_bonus,
        );

        let mut applied_rules = tag_resolution.applied;
        applied_rules.extend(bundle_resolution.applied);
        applied_rules.extend(bonus_resolution.applied);

        log::debug!(
            "Product classified | name={} | tags={} | bundles={} | bonus={} (raw {})",
            preview_compact(&product.name, 48),
            compress_label_set(&tag_resolution.tags),
            compress_label_set(&bundle_resolution.bundles),
            bonus_resolution.total,
            bonus_resolution.raw_total,
        );

        ClassificationResult {
            tags: tag_resolution.tags,
            bundles: bundle_resolution.bundles,
            quality_bonus: bonus_resolution.total,
            applied_rules,
        }
    }

    pub fn tag_rules(&self) -> &[TagRule] {
        &self.tag_rules
    }

    pub fn bundle_rules(&self) -> &[BundleRule] {
        &self.bundle_rules
    }

    pub fn bonus_rules(&self) -> &[BonusRule] {
        &self.bonus_rules
    }

    pub fn max_bonus(&self) -> Option<u32> {
        self.max_bonus
    }

    /// 构建期产生的非致命告警
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    pub fn rule_count(&self) -> usize {
        self.tag_rules.len() + self.bundle_rules.len() + self.bonus_rules.len()
    }
}
