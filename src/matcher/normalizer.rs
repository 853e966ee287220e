//! 文本归一化
//! 规则关键字与商品字段走同一套归一化，保证两侧可比：
//! 1. Unicode NFKD 分解后丢弃组合附加符（去除重音/变音符号）
//! 2. Unicode 小写
//! 3. 非字母数字字符统一替换为空格
//! 4. 连续空白折叠为单个空格，首尾不留空白

use rustc_hash::FxHashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 归一化文本，总是成功，空输入得到空输出
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase().filter(|c| !is_combining_mark(*c)));
        } else {
            // 标点/空白/符号都视为词边界
            pending_space = true;
        }
    }
    out
}

/// 已归一化的字段文本 + 词元集合
/// 单词关键字走集合查找，多词短语走带边界的子串扫描
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    tokens: FxHashSet<String>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let tokens = text.split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect();
        Self { text, tokens }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline(always)]
    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(normalize("Layer3 Gigabit Switch 48-Port"), "layer3 gigabit switch 48 port");
        assert_eq!(normalize("  FIREWALL   Appliance!! "), "firewall appliance");
        assert_eq!(normalize("Wi-Fi 6E/AX (Tri-band)"), "wi fi 6e ax tri band");
    }

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(normalize("Café Crème"), "cafe creme");
        assert_eq!(normalize("Überwachung"), "uberwachung");
    }

    #[test]
    fn test_fullwidth_fold() {
        assert_eq!(normalize("ＰｏＥ Switch"), "poe switch");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("--/..!!"), "");
    }

    #[test]
    fn test_non_latin_script_is_kept() {
        // 阿拉伯文/中文不会崩溃，字母保留
        assert_eq!(normalize("محول شبكة"), "محول شبكة");
        assert_eq!(normalize("交换机，千兆"), "交换机 千兆");
    }

    #[test]
    fn test_normalized_text_tokens() {
        let text = NormalizedText::new("PoE+ Switch, PoE");
        assert_eq!(text.as_str(), "poe switch poe");
        assert!(text.has_token("poe"));
        assert!(text.has_token("switch"));
        assert!(!text.has_token("poe switch"));
        assert!(NormalizedText::new("").is_empty());
    }
}
