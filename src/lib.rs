//! product-classifier - 基于关键词规则的商品分类引擎
//! 商品 → 语义标签 → 组合推荐 / 质量加分

// 导出全局错误类型
pub use self::error::{RulesError, RulesResult};

// 导出配置模块
pub use self::config::{CustomConfigBuilder, EngineConfig, RuleOrigin};

// 导出规则模块核心接口
pub use self::rule::core::{
    BonusRule, BundleRule, ClassificationResult, ManufacturerMatch, MatchField, Product, RuleDefinition, TagRule,
};
pub use self::rule::{ConfigWarning, RuleLoader, RuleSet, RuleValidator};

// 导出匹配模块核心接口
pub use self::matcher::{matches, normalize, KeywordMatcher, NormalizedText};

// 导出解析模块核心接口
pub use self::resolver::{resolve_bonus, resolve_bundles, resolve_tags};

// 导出引擎门面
pub use self::engine::RuleEngine;

// 声明所有子模块
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod rule;
pub mod utils;
