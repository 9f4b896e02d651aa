//! 依赖注入器实现

use crate::registry::Registry;
use di_abstractions::{
    DependencyInjector, DependencyInstance, DependencyRecord, DependencyRegistry, Injectable,
};
use stabby_common::{DependencyResult, InjectorConfig, TypeInfo};
use tracing::{debug, error, info};

/// 依赖注入器
///
/// 独占持有一个 [`Registry`]，并把注册表中的实例交付给 [`Injectable`] 对象。
#[derive(Debug, Default)]
pub struct Injector {
    registry: Registry,
    config: InjectorConfig,
}

impl Injector {
    /// 创建新的注入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建注入器
    pub fn with_config(config: InjectorConfig) -> Self {
        Self {
            registry: Registry::with_policy(config.resolution_policy),
            config,
        }
    }

    /// 注入器配置
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// 底层注册表
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// 注册已构建的依赖记录
    pub fn register_record(&mut self, record: DependencyRecord) {
        info!("注册依赖: {} (名称: {:?})", record.type_info(), record.name());
        self.registry.register_record(record);
    }

    /// 解析依赖实例
    pub fn resolve(&self, type_info: &TypeInfo, name: Option<&str>) -> DependencyResult<DependencyInstance> {
        self.registry.resolve(type_info, name)
    }

    /// 解析并克隆出具体类型的实例
    pub fn resolve_typed<T>(&self, name: Option<&str>) -> DependencyResult<T>
    where
        T: Clone + 'static,
    {
        self.registry.resolve_typed(name)
    }
}

impl DependencyInjector for Injector {
    fn register_dependency<T>(&mut self, instance: T, name: Option<&str>)
    where
        T: Send + Sync + 'static,
    {
        info!("注册依赖: {} (名称: {:?})", std::any::type_name::<T>(), name);
        self.registry.register(instance, name);
    }

    fn try_inject<I>(&self, target: &mut I) -> DependencyResult<()>
    where
        I: Injectable + ?Sized,
    {
        let target_name = std::any::type_name::<I>();
        let fields = target.injectable_fields();
        info!("开始注入: {}，字段数量: {}", target_name, fields.len());

        for field in fields {
            let injectable_type = field.injectable_type();
            let name = field.name().map(str::to_string);

            let instance = match self.registry.resolve(&injectable_type, name.as_deref()) {
                Ok(instance) => instance,
                Err(e) => {
                    error!("依赖解析失败，停止注入 {}: {}", target_name, e);
                    return Err(e.into_unresolved());
                }
            };

            if field.inject(instance.as_ref()) {
                if self.config.log_injections {
                    debug!("已注入字段: {} (名称: {:?})", injectable_type, name);
                }
            } else {
                debug!("实例类型与字段回调不匹配，跳过: {}", injectable_type);
            }
        }

        info!("注入完成: {}", target_name);
        Ok(())
    }
}
