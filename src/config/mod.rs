pub mod engine;

pub use engine::{CustomConfigBuilder, EngineConfig, RuleOrigin};
