//! 依赖注册表实现

use di_abstractions::{DependencyInstance, DependencyRecord, DependencyRegistry};
use stabby_common::{DependencyError, DependencyResult, ResolutionPolicy, TypeInfo};
use std::any::TypeId;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// 内存依赖注册表
///
/// 每个类型对应一个按注册时间从新到旧排列的记录序列。
#[derive(Debug, Default)]
pub struct Registry {
    /// 已注册的依赖
    registered_dependencies: HashMap<TypeId, VecDeque<DependencyRecord>>,
    /// 同名依赖的解析策略
    resolution_policy: ResolutionPolicy,
}

impl Registry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定解析策略创建注册表
    pub fn with_policy(resolution_policy: ResolutionPolicy) -> Self {
        Self {
            registered_dependencies: HashMap::new(),
            resolution_policy,
        }
    }

    /// 当前解析策略
    pub fn resolution_policy(&self) -> ResolutionPolicy {
        self.resolution_policy
    }

    /// 指定类型的所有记录，最新注册的在前
    pub fn records(&self, type_info: &TypeInfo) -> impl Iterator<Item = &DependencyRecord> {
        self.registered_dependencies
            .get(&type_info.id)
            .into_iter()
            .flatten()
    }
}

impl DependencyRegistry for Registry {
    fn register_record(&mut self, record: DependencyRecord) {
        debug!(
            "注册依赖记录: {} (名称: {:?})",
            record.type_info(),
            record.name()
        );
        self.registered_dependencies
            .entry(record.type_info().id)
            .or_default()
            .push_front(record);
    }

    fn resolve(&self, type_info: &TypeInfo, name: Option<&str>) -> DependencyResult<DependencyInstance> {
        let records = self
            .registered_dependencies
            .get(&type_info.id)
            .ok_or_else(|| DependencyError::not_found(type_info.name, name))?;

        let mut matching = records.iter().filter(|record| record.matches_name(name));
        let found = match self.resolution_policy {
            // 从新到旧扫描并保留最后一次匹配，即最早的注册
            ResolutionPolicy::OldestFirst => matching.last(),
            ResolutionPolicy::NewestFirst => matching.next(),
        };

        found
            .map(DependencyRecord::get)
            .ok_or_else(|| DependencyError::not_found(type_info.name, name))
    }

    fn is_registered(&self, type_info: &TypeInfo) -> bool {
        self.registered_dependencies
            .get(&type_info.id)
            .is_some_and(|records| !records.is_empty())
    }

    fn registered_types(&self) -> Vec<TypeInfo> {
        self.registered_dependencies
            .values()
            .filter_map(|records| records.front().map(|record| *record.type_info()))
            .collect()
    }

    fn len(&self) -> usize {
        self.registered_dependencies.values().map(VecDeque::len).sum()
    }
}
