pub mod rule_loader;

pub use rule_loader::RuleLoader;
#[cfg(feature = "embedded-rules")]
pub use rule_loader::EMBEDDED_RULES_JSON;
