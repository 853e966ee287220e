use std::fmt::{self, Write};

// ======================== 商品文本日志预览 ========================
/// 按空白切词后以单个空格重新拼接，最多输出 max_len 个字符，超长时追加省略号
/// 惰性格式化：只在日志级别开启时才真正遍历文本
pub fn preview_compact(s: &str, max_len: usize) -> impl fmt::Display + '_ {
    CompactPreview { source: s, max_len }
}

struct CompactPreview<'a> {
    source: &'a str,
    max_len: usize,
}

impl fmt::Display for CompactPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        for word in self.source.split_whitespace() {
            if written > 0 {
                if written >= self.max_len {
                    return f.write_str("…");
                }
                f.write_char(' ')?;
                written += 1;
            }
            for ch in word.chars() {
                if written >= self.max_len {
                    return f.write_str("…");
                }
                f.write_char(ch)?;
                written += 1;
            }
        }
        Ok(())
    }
}

// ======================== 标签集合日志格式化 ========================
/// 格式：[tag1, tag2, ...]，超过上限时附带总数
pub fn compress_label_set<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a String>,
    I::IntoIter: ExactSizeIterator,
{
    const MAX_COUNT: usize = 8; // 最多显示8个
    const MAX_LABEL_LEN: usize = 24; // 每个最多24字符

    let iter = labels.into_iter();
    let total_count = iter.len();
    if total_count == 0 {
        return "[]".to_string();
    }

    let mut result = String::with_capacity(MAX_COUNT * (MAX_LABEL_LEN + 2) + 20);
    result.push('[');
    for (idx, label) in iter.take(MAX_COUNT).enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        // 写入 String 不会失败
        let _ = write!(result, "{}", preview_compact(label, MAX_LABEL_LEN));
    }
    if total_count > MAX_COUNT {
        let _ = write!(result, "… (total: {})", total_count);
    }
    result.push(']');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_preview_compact() {
        assert_eq!(preview_compact("  Layer3   Gigabit\n Switch ", 64).to_string(), "Layer3 Gigabit Switch");
        assert_eq!(preview_compact("Enterprise Firewall", 10).to_string(), "Enterprise…");
        assert_eq!(preview_compact("", 10).to_string(), "");
        assert_eq!(preview_compact("PoE", 3).to_string(), "PoE");
        assert_eq!(preview_compact("Rack Server", 7).to_string(), "Rack Se…");
    }

    #[test]
    fn test_compress_label_set() {
        let empty: BTreeSet<String> = BTreeSet::new();
        assert_eq!(compress_label_set(&empty), "[]");

        let tags: BTreeSet<String> = ["network", "switch"].iter().map(|s| s.to_string()).collect();
        assert_eq!(compress_label_set(&tags), "[network, switch]");

        let many: Vec<String> = (0..10).map(|i| format!("t{}", i)).collect();
        assert_eq!(
            compress_label_set(&many),
            "[t0, t1, t2, t3, t4, t5, t6, t7… (total: 10)]"
        );
    }
}
