pub mod rule_validator;
pub mod warning;

pub use rule_validator::{RuleValidator, ValidatedRules};
pub use warning::{ConfigWarning, ValidationStats};
