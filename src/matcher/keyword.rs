use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use super::normalizer::{normalize, NormalizedText};

/// 在归一化文本中查找带词边界的子串
/// 边界 = 字符串首尾或空格；允许重叠扫描，避免 "ab ab" 在 "xab ab ab" 中漏匹配
pub fn contains_bounded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut from = 0;

    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let left_ok = start == 0 || bytes[start - 1] == b' ';
        let right_ok = end == bytes.len() || bytes[end] == b' ';
        if left_ok && right_ok {
            return true;
        }
        // 前进一个完整字符，保持 UTF-8 边界
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        if from >= haystack.len() {
            break;
        }
    }
    false
}

/// 关键字匹配：文本需已归一化，关键字在此处归一化
/// 例如 `pos` 不会命中 `posture`，`48-Port` 会命中 `48 port`
pub fn matches(normalized_text: &str, keyword: &str) -> bool {
    contains_bounded(normalized_text, &normalize(keyword))
}

/// 关键字匹配器（规则加载时编译，之后只读）
#[derive(Debug, Clone)]
pub enum KeywordMatcher {
    /// 单词关键字：词元集合查找
    Token(Arc<str>),
    /// 多词短语：带边界子串扫描
    Phrase(Arc<str>),
}

impl KeywordMatcher {
    /// 从原始关键字构建匹配器，归一化后为空时返回 None
    pub fn keyword(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        if normalized.contains(' ') {
            Some(Self::Phrase(Arc::from(normalized)))
        } else {
            Some(Self::Token(Arc::from(normalized)))
        }
    }

    /// 执行匹配
    #[inline(always)]
    pub fn matches(&self, text: &NormalizedText) -> bool {
        match self {
            KeywordMatcher::Token(token) => text.has_token(token),
            KeywordMatcher::Phrase(phrase) => contains_bounded(text.as_str(), phrase),
        }
    }

    /// 描述匹配器（用于日志/调试输出）
    pub fn describe(&self) -> String {
        match self {
            KeywordMatcher::Token(s) => format!("token: {}", s),
            KeywordMatcher::Phrase(s) => format!("phrase: {}", s),
        }
    }
}

/// 编译规则的正则约束：大小写不敏感，作用于归一化文本
pub fn compile_pattern(raw: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(raw).case_insensitive(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary() {
        assert!(matches("poe switch", "PoE"));
        assert!(!matches("posture sensor", "pos"));
        assert!(matches("pos terminal", "pos"));
        assert!(!matches("firewalls", "firewall"));
    }

    #[test]
    fn test_multi_word_keyword() {
        assert!(matches("layer3 gigabit switch 48 port", "48-Port"));
        assert!(matches("next gen firewall appliance", "firewall appliance"));
        assert!(!matches("firewall and appliance", "firewall appliance"));
        assert!(!matches("xfirewall appliance", "firewall appliance"));
    }

    #[test]
    fn test_overlapping_scan() {
        assert!(contains_bounded("xab ab ab", "ab ab"));
        assert!(!contains_bounded("xab abx", "ab ab"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!matches("", "switch"));
        assert!(!matches("switch", ""));
        assert!(!matches("switch", "--"));
        assert!(!contains_bounded("", ""));
    }

    #[test]
    fn test_multibyte_scan() {
        assert!(contains_bounded("محول شبكة", "شبكة"));
        assert!(!contains_bounded("محول شبكةx", "شبكة"));
    }

    #[test]
    fn test_matcher_kinds() {
        let token = KeywordMatcher::keyword("Switch").unwrap();
        let phrase = KeywordMatcher::keyword("Access Point").unwrap();
        assert!(matches!(token, KeywordMatcher::Token(_)));
        assert!(matches!(phrase, KeywordMatcher::Phrase(_)));
        assert!(KeywordMatcher::keyword(" -- ").is_none());

        let text = NormalizedText::new("Wireless ACCESS-POINT, ceiling switch");
        assert!(token.matches(&text));
        assert!(phrase.matches(&text));
    }

    #[test]
    fn test_compile_pattern() {
        let re = compile_pattern(r"\b(24|48) PORT\b").unwrap();
        assert!(re.is_match(NormalizedText::new("Switch 48-Port").as_str()));
        assert!(!re.is_match(NormalizedText::new("Switch 16-Port").as_str()));
        assert!(compile_pattern("(unclosed").is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(KeywordMatcher::keyword("PoE+").unwrap().describe(), "token: poe");
        assert_eq!(KeywordMatcher::keyword("Access-Point").unwrap().describe(), "phrase: access point");
    }
}
