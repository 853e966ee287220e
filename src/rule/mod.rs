//! 规则模块：定义 → 加载 → 校验 → 规则集
pub mod core;
pub mod loader;
pub mod rule_set;
pub mod validator;

pub use self::core::{ClassificationResult, Product, RuleDefinition};
pub use loader::RuleLoader;
pub use rule_set::RuleSet;
pub use validator::{ConfigWarning, RuleValidator};
