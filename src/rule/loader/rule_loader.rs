use std::path::Path;

use crate::config::{EngineConfig, RuleOrigin};
use crate::error::{RulesError, RulesResult};
use crate::rule::core::RuleDefinition;

/// 内置默认规则（仅在开启embedded-rules特性时编译）
#[cfg(feature = "embedded-rules")]
pub const EMBEDDED_RULES_JSON: &str = include_str!("../../../data/default_rules.json");

/// 规则加载器：只负责把规则来源读成 RuleDefinition，不做校验
#[derive(Debug, Default)]
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self
    }

    /// 同步加载
    pub fn load(&self, config: &EngineConfig) -> RulesResult<RuleDefinition> {
        match &config.origin {
            RuleOrigin::Embedded => Self::load_embedded(),
            RuleOrigin::LocalFile(path) => self.load_from_file(path),
            RuleOrigin::Inline(json) => Self::parse(json, "inline"),
        }
    }

    /// 异步加载（文件读取走 tokio::fs，解析逻辑与同步版本一致）
    #[cfg(feature = "async-io")]
    pub async fn load_async(&self, config: &EngineConfig) -> RulesResult<RuleDefinition> {
        match &config.origin {
            RuleOrigin::LocalFile(path) => {
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    RulesError::RuleLoadError(format!("failed to read rule file [{}]: {}", path.display(), e))
                })?;
                Self::parse(&content, &path.display().to_string())
            }
            _ => self.load(config),
        }
    }

    /// 从本地文件加载
    pub fn load_from_file(&self, path: &Path) -> RulesResult<RuleDefinition> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RulesError::RuleLoadError(format!("failed to read rule file [{}]: {}", path.display(), e))
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    #[cfg(feature = "embedded-rules")]
    fn load_embedded() -> RulesResult<RuleDefinition> {
        Self::parse(EMBEDDED_RULES_JSON, "embedded")
    }

    // 关闭特性时，返回明确的错误
    #[cfg(not(feature = "embedded-rules"))]
    fn load_embedded() -> RulesResult<RuleDefinition> {
        Err(RulesError::FeatureDisabled(
            "embedded-rules feature is disabled, cannot use embedded rule set. Please enable this feature or use file/inline rules.".to_string(),
        ))
    }

    fn parse(json: &str, source: &str) -> RulesResult<RuleDefinition> {
        let definition = RuleDefinition::from_json(json)?;
        log::debug!(
            "Rule definition parsed | source={} | version={} | rules={}",
            source,
            definition.version,
            definition.rule_count()
        );
        Ok(definition)
    }
}
