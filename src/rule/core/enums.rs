use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 标签规则可匹配的商品字段
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Name,
    Category,
    Description,
}

impl MatchField {
    /// 未声明 match_fields 时的默认字段：名称 + 描述
    pub fn default_fields() -> Vec<MatchField> {
        vec![MatchField::Name, MatchField::Description]
    }
}

impl Display for MatchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchField::Name => write!(f, "name"),
            MatchField::Category => write!(f, "category"),
            MatchField::Description => write!(f, "description"),
        }
    }
}

/// 加分规则的厂商条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManufacturerMatch {
    /// 通配符 `*`：任意厂商（含缺失厂商）
    Any,
    /// 归一化后的厂商名，精确相等
    Exact(String),
}

impl ManufacturerMatch {
    pub const WILDCARD: &'static str = "*";

    /// 判断归一化后的商品厂商是否满足条件
    #[inline(always)]
    pub fn accepts(&self, normalized_manufacturer: &str) -> bool {
        match self {
            ManufacturerMatch::Any => true,
            ManufacturerMatch::Exact(expected) => expected == normalized_manufacturer,
        }
    }
}

impl Display for ManufacturerMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ManufacturerMatch::Any => write!(f, "{}", Self::WILDCARD),
            ManufacturerMatch::Exact(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_field_deserialize() {
        let fields: Vec<MatchField> = serde_json::from_str(r#"["name","category","description"]"#).unwrap();
        assert_eq!(fields, vec![MatchField::Name, MatchField::Category, MatchField::Description]);
        assert!(serde_json::from_str::<MatchField>(r#""sku""#).is_err());
    }

    #[test]
    fn test_manufacturer_accepts() {
        assert!(ManufacturerMatch::Any.accepts(""));
        assert!(ManufacturerMatch::Any.accepts("cisco"));
        let exact = ManufacturerMatch::Exact("fortinet".into());
        assert!(exact.accepts("fortinet"));
        assert!(!exact.accepts("fortinet inc"));
        assert!(!exact.accepts(""));
    }
}
