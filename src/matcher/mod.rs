//! 归一化 + 关键字匹配
pub mod keyword;
pub mod normalizer;

pub use keyword::{compile_pattern, contains_bounded, matches, KeywordMatcher};
pub use normalizer::{normalize, NormalizedText};
