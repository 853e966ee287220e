//! 规则文件原始结构（反序列化层）
//! 字段全部宽松接收，结构合法性统一交给 RuleValidator 校验

use serde::{Deserialize, Serialize};

use super::MatchField;

/// 当前支持的规则文件版本
pub const RULE_FILE_VERSION: u32 = 1;

fn default_version() -> u32 {
    RULE_FILE_VERSION
}

/// 规则文件根结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    #[serde(default = "default_version")]
    pub version: u32,
    /// 质量加分上限（可被 EngineConfig::max_bonus 覆盖）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bonus: Option<u32>,
    #[serde(default)]
    pub tag_rules: Vec<RawTagRule>,
    #[serde(default)]
    pub bundle_rules: Vec<RawBundleRule>,
    #[serde(default)]
    pub bonus_rules: Vec<RawBonusRule>,
}

/// 原始标签规则
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTagRule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// 正则模式（大小写不敏感，作用于归一化文本）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    /// None 表示使用引擎默认字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_fields: Option<Vec<MatchField>>,
    /// 厂商限定，空表示不限
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manufacturers: Vec<String>,
    #[serde(default)]
    pub priority: i32,
}

/// 原始组合推荐规则
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBundleRule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub bundle: String,
    #[serde(default)]
    pub required_tags: Vec<String>,
}

/// 原始加分规则
/// bonus 使用有符号类型接收，负值在校验阶段报错而不是在反序列化阶段报错
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBonusRule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub required_tag: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub bonus: i64,
}

impl RuleDefinition {
    /// 从 JSON 文本解析
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn rule_count(&self) -> usize {
        self.tag_rules.len() + self.bundle_rules.len() + self.bonus_rules.len()
    }
}
