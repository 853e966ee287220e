//! Rule engine facade
//! 规则引擎门面
//! 核心职责：
//! 1. 持有当前生效的规则集快照（Arc 共享，只读）
//! 2. 单商品 / 批量分类
//! 3. 规则热重载：整体替换快照，单次解析永远只看到一个版本的规则

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::config::EngineConfig;
use crate::error::RulesResult;
use crate::rule::core::{ClassificationResult, Product};
use crate::rule::RuleSet;

/// 规则引擎
#[derive(Debug)]
pub struct RuleEngine {
    /// 当前生效的规则集；锁只在克隆/替换 Arc 的瞬间持有
    active: RwLock<Arc<RuleSet>>,
    /// 引擎配置（重载时复用）
    config: EngineConfig,
    /// 规则集版本号，每次替换 +1
    generation: AtomicU64,
}

impl RuleEngine {
    /// 按配置加载规则并创建引擎，配置错误直接返回
    pub fn new(config: EngineConfig) -> RulesResult<Self> {
        log::info!("Creating rule engine from {}", config.origin_label());
        let rule_set = RuleSet::load(&config)?;
        Ok(Self::with_rule_set(rule_set, config))
    }

    /// 异步创建（规则文件读取走 tokio::fs）
    #[cfg(feature = "async-io")]
    pub async fn new_async(config: EngineConfig) -> RulesResult<Self> {
        log::info!("Creating rule engine (async) from {}", config.origin_label());
        let rule_set = RuleSet::load_async(&config).await?;
        Ok(Self::with_rule_set(rule_set, config))
    }

    /// 使用已构建的规则集创建引擎（测试夹具/预加载场景）
    pub fn with_rule_set(rule_set: RuleSet, config: EngineConfig) -> Self {
        Self {
            active: RwLock::new(Arc::new(rule_set)),
            config,
            generation: AtomicU64::new(1),
        }
    }

    /// 获取当前规则集快照
    pub fn snapshot(&self) -> Arc<RuleSet> {
        // 锁内只有一个 Arc，不存在写了一半的状态，中毒时直接取回
        let guard = self.active.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// 单商品分类
    pub fn resolve(&self, product: &Product) -> ClassificationResult {
        self.snapshot().resolve(product)
    }

    /// 批量分类：整批共用同一个快照
    pub fn resolve_batch(&self, products: &[Product]) -> Vec<ClassificationResult> {
        let rule_set = self.snapshot();
        let start = Instant::now();
        let results = Self::resolve_all(&rule_set, products);
        log::info!(
            "Batch classified | products={} | Time: {}ms | generation={}",
            products.len(),
            start.elapsed().as_millis(),
            self.generation(),
        );
        results
    }

    #[cfg(feature = "parallel")]
    fn resolve_all(rule_set: &RuleSet, products: &[Product]) -> Vec<ClassificationResult> {
        use rayon::prelude::*;
        products.par_iter().map(|product| rule_set.resolve(product)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve_all(rule_set: &RuleSet, products: &[Product]) -> Vec<ClassificationResult> {
        products.iter().map(|product| rule_set.resolve(product)).collect()
    }

    /// 从配置的规则来源重新加载
    /// 失败时旧快照保持生效
    pub fn reload(&self) -> RulesResult<()> {
        let rule_set = RuleSet::load(&self.config)?;
        self.replace(rule_set);
        Ok(())
    }

    /// 异步重新加载
    #[cfg(feature = "async-io")]
    pub async fn reload_async(&self) -> RulesResult<()> {
        let rule_set = RuleSet::load_async(&self.config).await?;
        self.replace(rule_set);
        Ok(())
    }

    /// 原子替换规则集，返回被替换的旧快照
    pub fn replace(&self, rule_set: RuleSet) -> Arc<RuleSet> {
        let new_count = rule_set.rule_count();
        let new_rules = Arc::new(rule_set);
        let mut guard = self.active.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = std::mem::replace(&mut *guard, new_rules);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        drop(guard);

        log::info!(
            "Rule set replaced | generation={} | rules={} (was {})",
            generation,
            new_count,
            previous.rule_count(),
        );
        previous
    }

    /// 当前规则集版本号（首个规则集为 1）
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
