//! 非致命配置告警：记录日志后继续构建

use std::fmt::{Display, Formatter};

/// 配置告警
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// 组合规则依赖的标签没有任何标签规则能产生，该组合永远不会命中
    UnknownBundleTag { rule: String, tag: String },
    /// 加分规则依赖的标签没有任何标签规则能产生
    UnknownBonusTag { rule: String, tag: String },
}

impl Display for ConfigWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownBundleTag { rule, tag } => write!(
                f,
                "bundle rule [{}] requires tag `{}` which no tag rule produces",
                rule, tag
            ),
            ConfigWarning::UnknownBonusTag { rule, tag } => write!(
                f,
                "bonus rule [{}] requires tag `{}` which no tag rule produces",
                rule, tag
            ),
        }
    }
}

/// 校验统计，构建完成后输出到日志
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub tag_rules: u32,
    pub bundle_rules: u32,
    pub bonus_rules: u32,
    /// 编译后的关键字匹配器数量
    pub keyword_matchers: u32,
    /// 编译后的正则匹配器数量
    pub pattern_matchers: u32,
    /// 规则内重复（归一化后相同）而被合并的关键字
    pub merged_keywords: u32,
    pub warnings: u32,
}

impl ValidationStats {
    pub fn print_summary(&self) {
        log::info!(
            "Rule validation done | tag={} bundle={} bonus={} | keyword matchers={} pattern matchers={} merged keywords={} | warnings={}",
            self.tag_rules,
            self.bundle_rules,
            self.bonus_rules,
            self.keyword_matchers,
            self.pattern_matchers,
            self.merged_keywords,
            self.warnings,
        );
    }
}
