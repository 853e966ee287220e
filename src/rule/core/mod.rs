pub mod classification;
pub mod definition;
pub mod enums;
pub mod product;
pub mod rules;

pub use classification::ClassificationResult;
pub use definition::{RawBonusRule, RawBundleRule, RawTagRule, RuleDefinition, RULE_FILE_VERSION};
pub use enums::{ManufacturerMatch, MatchField};
pub use product::Product;
pub use rules::{BonusRule, BundleRule, TagRule};
