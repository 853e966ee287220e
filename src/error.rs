//! 全局错误类型定义
//! 仅覆盖规则集构建阶段的致命错误，单个商品的分类解析永不返回错误
use thiserror::Error;

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RulesError {
    // ===================== 规则结构错误 =====================
    /// 规则ID在所有规则类型中必须唯一
    #[error("Duplicate rule id: {0}")]
    DuplicateRuleId(String),

    /// 必填字段缺失或为空（rule 为规则ID，缺失ID时为规则序号描述）
    #[error("Rule [{rule}] is missing required field `{field}`")]
    MissingField { rule: String, field: &'static str },

    /// 标签规则关键字为空（含归一化后为空的关键字）
    #[error("Tag rule [{0}] has no usable keywords")]
    EmptyKeywords(String),

    /// 组合规则依赖标签为空
    #[error("Bundle rule [{0}] has no required tags")]
    EmptyRequiredTags(String),

    /// 加分规则分值为负
    #[error("Bonus rule [{rule}] has negative bonus {bonus}")]
    NegativeBonus { rule: String, bonus: i64 },

    /// 正则模式编译失败
    #[error("Tag rule [{rule}] has invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: RegexError,
    },

    /// 规则文件版本不支持
    #[error("Unsupported rule file version: {0}")]
    UnsupportedVersion(u32),

    /// 严格模式下存在校验告警
    #[error("Strict validation rejected {} warning(s): {}", .0.len(), .0.join("; "))]
    StrictValidation(Vec<String>),

    // ===================== 加载错误 =====================
    #[error("Rule load failed: {0}")]
    RuleLoadError(String),

    #[error("Feature disabled: {0}")]
    FeatureDisabled(String),

    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type RulesResult<T> = Result<T, RulesError>;
