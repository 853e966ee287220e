//! 全局引擎配置管理

use std::path::PathBuf;

use crate::rule::core::MatchField;

/// 规则来源
#[derive(Debug, Clone, Default)]
pub enum RuleOrigin {
    #[default]
    Embedded,           // 内置规则（data/default_rules.json，编译期 include）
    LocalFile(PathBuf), // 本地规则文件（运行时读取）
    Inline(String),     // 调用方直接提供的规则 JSON 文本
}

/// 完整引擎配置
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 规则来源
    pub origin: RuleOrigin,
    /// 质量加分上限；Some 时覆盖规则文件中的 max_bonus
    pub max_bonus: Option<u32>,
    /// 标签规则未声明 match_fields 时使用的默认匹配字段
    pub default_match_fields: Vec<MatchField>,
    /// 严格模式：任何校验告警都视为致命错误
    pub strict: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            origin: RuleOrigin::default(),
            max_bonus: None,
            default_match_fields: MatchField::default_fields(),
            strict: false,
        }
    }
}

impl EngineConfig {
    /// 内置规则
    pub fn embedded() -> Self {
        Self::default()
    }

    /// 本地规则文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: RuleOrigin::LocalFile(path.into()),
            ..Self::default()
        }
    }

    /// 内联规则 JSON
    pub fn inline(json: impl Into<String>) -> Self {
        Self {
            origin: RuleOrigin::Inline(json.into()),
            ..Self::default()
        }
    }

    /// 来源描述（用于日志）
    pub fn origin_label(&self) -> String {
        match &self.origin {
            RuleOrigin::Embedded => "embedded".to_string(),
            RuleOrigin::LocalFile(path) => format!("file:{}", path.display()),
            RuleOrigin::Inline(json) => format!("inline({} bytes)", json.len()),
        }
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: EngineConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn origin(mut self, origin: RuleOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn max_bonus(mut self, max_bonus: u32) -> Self {
        self.config.max_bonus = Some(max_bonus);
        self
    }

    pub fn default_match_fields(mut self, fields: Vec<MatchField>) -> Self {
        self.config.default_match_fields = fields;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn build(mut self) -> EngineConfig {
        // 空字段列表没有意义，回退到默认字段
        if self.config.default_match_fields.is_empty() {
            self.config.default_match_fields = MatchField::default_fields();
        }
        self.config
    }
}
