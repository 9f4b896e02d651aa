//! 依赖记录

use stabby_common::TypeInfo;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除后的依赖实例
pub type DependencyInstance = Arc<dyn Any + Send + Sync>;

/// 依赖记录
///
/// 一次注册产生的 (实例, 声明类型, 名称) 三元组，创建后不可变。
#[derive(Clone)]
pub struct DependencyRecord {
    instance: DependencyInstance,
    type_info: TypeInfo,
    name: Option<String>,
}

impl DependencyRecord {
    /// 创建新的依赖记录
    pub fn new<T>(instance: T, name: Option<&str>) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            instance: Arc::new(instance),
            type_info: TypeInfo::of::<T>(),
            name: name.map(str::to_string),
        }
    }

    /// 获取实例
    pub fn get(&self) -> DependencyInstance {
        Arc::clone(&self.instance)
    }

    /// 声明类型
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 限定名称
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 名称是否完全匹配（两者均未命名也视为匹配）
    pub fn matches_name(&self, name: Option<&str>) -> bool {
        self.name.as_deref() == name
    }

    /// 以具体类型借用实例
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for DependencyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyRecord")
            .field("type_info", &self.type_info)
            .field("name", &self.name)
            .field("instance", &"<instance>")
            .finish()
    }
}
