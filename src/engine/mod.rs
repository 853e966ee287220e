pub mod engine;

pub use engine::RuleEngine;
