//! 组合推荐推导：标签组合 → bundle
use std::collections::BTreeSet;

use crate::rule::core::BundleRule;

/// 组合推荐结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleResolution {
    pub bundles: BTreeSet<String>,
    pub applied: Vec<String>,
}

/// 依赖标签全部出现在标签集合中（AND）时输出 bundle
/// 必须在同一商品的标签解析全部完成之后调用，消费的是完整标签集合
pub fn resolve_bundles(tags: &BTreeSet<String>, bundle_rules: &[BundleRule]) -> BundleResolution {
    let mut resolution = BundleResolution::default();
    if tags.is_empty() {
        return resolution;
    }

    for rule in bundle_rules {
        if rule.required_tags.iter().all(|tag| tags.contains(tag)) {
            log::trace!("Bundle rule [{}] fired -> {}", rule.id, rule.bundle);
            resolution.bundles.insert(rule.bundle.clone());
            resolution.applied.push(rule.id.clone());
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|t| t.to_string()).collect()
    }

    fn rule(id: &str, bundle: &str, required: &[&str]) -> BundleRule {
        BundleRule {
            id: id.into(),
            bundle: bundle.into(),
            required_tags: required.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_and_semantics() {
        let rules = vec![rule("b1", "support_subscription", &["security", "firewall"])];
        assert!(resolve_bundles(&tags(&["security"]), &rules).bundles.is_empty());
        assert!(resolve_bundles(&tags(&["firewall"]), &rules).bundles.is_empty());

        let res = resolve_bundles(&tags(&["firewall", "poe", "security"]), &rules);
        assert!(res.bundles.contains("support_subscription"));
        assert_eq!(res.applied, vec!["b1".to_string()]);
    }

    #[test]
    fn test_bundle_deduplicated() {
        let rules = vec![
            rule("b1", "rack_mount_kit", &["switch"]),
            rule("b2", "rack_mount_kit", &["server"]),
        ];
        let res = resolve_bundles(&tags(&["server", "switch"]), &rules);
        assert_eq!(res.bundles.len(), 1);
        assert_eq!(res.applied.len(), 2);
    }

    #[test]
    fn test_empty_tags() {
        let rules = vec![rule("b1", "rack_mount_kit", &["switch"])];
        assert_eq!(resolve_bundles(&BTreeSet::new(), &rules), BundleResolution::default());
    }
}
