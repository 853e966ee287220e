//! 三段式解析：标签 → 组合推荐 / 质量加分
//! 组合与加分都只依赖完整的标签集合，二者之间互不依赖

pub mod bonus;
pub mod bundle;
pub mod tag;

use crate::matcher::{normalize, NormalizedText};
use crate::rule::core::{MatchField, Product};

pub use bonus::{resolve_bonus, BonusResolution};
pub use bundle::{resolve_bundles, BundleResolution};
pub use tag::{resolve_tags, TagResolution};

/// 每个商品只归一化一次，供所有解析阶段共享
#[derive(Debug, Clone, Default)]
pub struct NormalizedProduct {
    pub name: NormalizedText,
    pub category: NormalizedText,
    pub description: NormalizedText,
    pub manufacturer: String,
}

impl NormalizedProduct {
    pub fn new(product: &Product) -> Self {
        Self {
            name: NormalizedText::new(&product.name),
            category: NormalizedText::new(&product.category),
            description: NormalizedText::new(&product.description),
            manufacturer: normalize(&product.manufacturer),
        }
    }

    #[inline(always)]
    pub fn field(&self, field: MatchField) -> &NormalizedText {
        match field {
            MatchField::Name => &self.name,
            MatchField::Category => &self.category,
            MatchField::Description => &self.description,
        }
    }
}
