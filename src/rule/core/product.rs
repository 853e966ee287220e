//! 分类输入：商品记录

use serde::{Deserialize, Serialize};

use super::MatchField;

/// 待分类商品
/// 所有字段缺失时均视为空字符串，分类过程不会因字段缺失失败
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, alias = "ProductName")]
    pub name: String,
    #[serde(default, alias = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, alias = "Category")]
    pub category: String,
    #[serde(default, alias = "ShortDescription", alias = "ExtendedDescription")]
    pub description: String,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 读取可匹配字段的原始文本
    pub fn field(&self, field: MatchField) -> &str {
        match field {
            MatchField::Name => &self.name,
            MatchField::Category => &self.category,
            MatchField::Description => &self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let product: Product = serde_json::from_str(r#"{"name":"Switch"}"#).unwrap();
        assert_eq!(product.name, "Switch");
        assert_eq!(product.manufacturer, "");
        assert_eq!(product.category, "");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_legacy_column_aliases() {
        let product: Product = serde_json::from_str(
            r#"{"ProductName":"FortiGate 60F","Manufacturer":"Fortinet","Category":"Security","ShortDescription":"NGFW"}"#,
        )
        .unwrap();
        assert_eq!(
            product,
            Product::new("FortiGate 60F")
                .with_manufacturer("Fortinet")
                .with_category("Security")
                .with_description("NGFW")
        );
    }

    #[test]
    fn test_field_accessor() {
        let product = Product::new("a").with_category("b").with_description("c");
        assert_eq!(product.field(MatchField::Name), "a");
        assert_eq!(product.field(MatchField::Category), "b");
        assert_eq!(product.field(MatchField::Description), "c");
    }
}
