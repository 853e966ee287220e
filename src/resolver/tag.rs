use std::collections::BTreeSet;

use super::NormalizedProduct;
use crate::matcher::{KeywordMatcher, NormalizedText};
use crate::rule::core::{Product, TagRule};

/// 标签解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagResolution {
    pub tags: BTreeSet<String>,
    /// 命中的标签规则ID，顺序与规则顺序一致
    pub applied: Vec<String>,
}

/// 对原始商品解析标签
pub fn resolve_tags(product: &Product, tag_rules: &[TagRule]) -> TagResolution {
    resolve_tags_normalized(&NormalizedProduct::new(product), tag_rules)
}

/// 对已归一化商品解析标签
/// 纯累加：任何规则都不会抑制其他规则，结果集合与规则顺序无关
pub(crate) fn resolve_tags_normalized(
    product: &NormalizedProduct,
    tag_rules: &[TagRule],
) -> TagResolution {
    let mut resolution = TagResolution::default();

    for rule in tag_rules {
        if !rule.accepts_manufacturer(&product.manufacturer) {
            continue;
        }
        if let Some(hit) = rule_hit(rule, product) {
            log::trace!("Tag rule [{}] fired -> {} ({})", rule.id, rule.tag, hit.describe());
            resolution.tags.insert(rule.tag.clone());
            resolution.applied.push(rule.id.clone());
        }
    }
    resolution
}

/// 命中条件：任一字段命中任一关键字；规则带正则时，还需任一字段命中任一正则
/// 返回命中的关键字匹配器
#[inline]
fn rule_hit<'r>(rule: &'r TagRule, product: &NormalizedProduct) -> Option<&'r KeywordMatcher> {
    let keywords = &rule.keywords;
    let hit = rule_fields(rule, product).find_map(|text| keywords.iter().find(|matcher| matcher.matches(text)))?;
    if rule.patterns.is_empty()
        || rule_fields(rule, product).any(|text| rule.patterns.iter().any(|re| re.is_match(text.as_str())))
    {
        Some(hit)
    } else {
        None
    }
}

/// 规则配置的非空字段
fn rule_fields<'a>(rule: &'a TagRule, product: &'a NormalizedProduct) -> impl Iterator<Item = &'a NormalizedText> + 'a {
    rule.match_fields
        .iter()
        .map(move |field| product.field(*field))
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::compile_pattern;
    use crate::rule::core::MatchField;
    use rustc_hash::FxHashSet;

    fn rule(id: &str, tag: &str, keywords: &[&str], fields: &[MatchField]) -> TagRule {
        TagRule {
            id: id.into(),
            tag: tag.into(),
            keywords: keywords.iter().filter_map(|k| KeywordMatcher::keyword(k)).collect(),
            patterns: Vec::new(),
            match_fields: fields.to_vec(),
            manufacturers: FxHashSet::default(),
            priority: 0,
        }
    }

    fn default_fields() -> Vec<MatchField> {
        MatchField::default_fields()
    }

    #[test]
    fn test_multiple_rules_same_tag_deduplicate() {
        let rules = vec![
            rule("t1", "network", &["switch"], &default_fields()),
            rule("t2", "network", &["gigabit"], &default_fields()),
        ];
        let res = resolve_tags(&Product::new("Gigabit Switch"), &rules);
        assert_eq!(res.tags.len(), 1);
        assert!(res.tags.contains("network"));
        assert_eq!(res.applied, vec!["t1".to_string(), "t2".to_string()]);
    }

    #[test]
    fn test_rule_order_does_not_change_tags() {
        let mut rules = vec![
            rule("t1", "security", &["firewall"], &default_fields()),
            rule("t2", "poe", &["poe"], &default_fields()),
            rule("t3", "firewall", &["firewall"], &default_fields()),
        ];
        let product = Product::new("Firewall PoE");
        let forward = resolve_tags(&product, &rules).tags;
        rules.reverse();
        let backward = resolve_tags(&product, &rules).tags;
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_match_fields_are_respected() {
        let rules = vec![
            rule("t-cat", "server", &["server"], &[MatchField::Category]),
            rule("t-desc", "rack", &["rack"], &[MatchField::Description]),
        ];
        let product = Product::new("Server 1U rack").with_category("Compute");
        let res = resolve_tags(&product, &rules);
        assert!(res.tags.is_empty());

        let product = Product::new("X")
            .with_category("Rack Servers / Server")
            .with_description("19in rack mountable");
        let res = resolve_tags(&product, &rules);
        assert_eq!(res.tags.into_iter().collect::<Vec<_>>(), vec!["rack", "server"]);
    }

    #[test]
    fn test_manufacturer_restriction() {
        let mut restricted = rule("t-meraki", "cloud_managed", &["mx"], &default_fields());
        restricted.manufacturers.insert("cisco meraki".into());
        let rules = vec![restricted];

        let hit = resolve_tags(&Product::new("MX68 MX").with_manufacturer("Cisco-Meraki"), &rules);
        assert!(hit.tags.contains("cloud_managed"));
        let miss = resolve_tags(&Product::new("MX68 MX").with_manufacturer("Other"), &rules);
        assert!(miss.tags.is_empty());
    }

    #[test]
    fn test_pattern_narrows_keyword_hit() {
        let mut switch = rule("t-switch", "switch", &["switch"], &default_fields());
        switch.patterns = vec![compile_pattern(r"\b(24|48) ports?\b").unwrap()];
        let rules = vec![switch];

        let both = resolve_tags(&Product::new("Managed Switch 48-Port"), &rules);
        assert!(both.tags.contains("switch"));

        // 关键字命中但正则未命中
        let keyword_only = resolve_tags(&Product::new("Managed Switch 8-Port"), &rules);
        assert!(keyword_only.tags.is_empty());

        // 正则命中但没有关键字
        let pattern_only = resolve_tags(&Product::new("Widget 24 ports fully managed"), &rules);
        assert!(pattern_only.tags.is_empty());
        assert!(pattern_only.applied.is_empty());
    }

    #[test]
    fn test_pattern_may_hit_another_field() {
        let mut switch = rule(
            "t-switch",
            "switch",
            &["switch"],
            &[MatchField::Name, MatchField::Description],
        );
        switch.patterns = vec![compile_pattern(r"\bmanaged\b").unwrap()];
        let product = Product::new("Gigabit Switch").with_description("Fully managed, fanless");
        assert!(resolve_tags(&product, &[switch]).tags.contains("switch"));
    }

    #[test]
    fn test_empty_product() {
        let rules = vec![rule("t1", "switch", &["switch"], &default_fields())];
        let res = resolve_tags(&Product::default(), &rules);
        assert_eq!(res, TagResolution::default());
    }
}
