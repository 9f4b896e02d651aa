//! 依赖注册表抽象接口

use crate::record::{DependencyInstance, DependencyRecord};
use stabby_common::{DependencyError, DependencyResult, TypeInfo};

/// 依赖注册表 trait
///
/// 按类型（可选名称限定）保存和解析依赖实例。注册需要独占访问，
/// 实现不提供内部同步。
pub trait DependencyRegistry {
    /// 注册依赖记录
    fn register_record(&mut self, record: DependencyRecord);

    /// 解析依赖实例
    ///
    /// 没有该类型的注册、或没有名称完全匹配的记录时返回
    /// [`DependencyError::NotFound`]。
    fn resolve(&self, type_info: &TypeInfo, name: Option<&str>) -> DependencyResult<DependencyInstance>;

    /// 检查类型是否有任何注册
    fn is_registered(&self, type_info: &TypeInfo) -> bool;

    /// 获取所有已注册的类型
    fn registered_types(&self) -> Vec<TypeInfo>;

    /// 已注册的记录总数
    fn len(&self) -> usize;

    /// 注册表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 注册实例
    fn register<T>(&mut self, instance: T, name: Option<&str>)
    where
        T: Send + Sync + 'static,
        Self: Sized,
    {
        self.register_record(DependencyRecord::new(instance, name));
    }

    /// 检查是否存在可解析的记录
    fn contains(&self, type_info: &TypeInfo, name: Option<&str>) -> bool {
        self.resolve(type_info, name).is_ok()
    }

    /// 解析并克隆出具体类型的实例
    fn resolve_typed<T>(&self, name: Option<&str>) -> DependencyResult<T>
    where
        T: Clone + 'static,
        Self: Sized,
    {
        let type_info = TypeInfo::of::<T>();
        let instance = self.resolve(&type_info, name)?;
        instance
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| DependencyError::not_found(type_info.name, name))
    }
}
