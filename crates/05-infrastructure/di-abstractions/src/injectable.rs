//! 可注入对象协议
//!
//! 消费者实现 [`Injectable`]，为每个需要的依赖返回一个字段描述符；
//! 注入器解析后通过描述符的回调把值交给消费者。

use stabby_common::TypeInfo;
use std::any::Any;

/// 字段注入回调
pub type InjectorFn<'a, T> = Box<dyn FnOnce(T) + 'a>;

/// 可注入字段 trait
pub trait InjectableField {
    /// 请求的依赖类型
    fn injectable_type(&self) -> TypeInfo;

    /// 限定名称
    fn name(&self) -> Option<&str>;

    /// 交付解析到的实例
    ///
    /// 实例的运行时类型与回调接受的类型不一致时不调用回调，返回 `false`。
    fn inject(self: Box<Self>, value: &(dyn Any + Send + Sync)) -> bool;
}

/// 可注入对象 trait
pub trait Injectable {
    /// 获取需要注入的字段
    ///
    /// 每次注入都会重新调用，结果不会被缓存。
    fn injectable_fields(&mut self) -> Vec<Box<dyn InjectableField + '_>>;
}

/// 字段描述符
pub struct FieldDescriptor<'a, T> {
    injectable_type: TypeInfo,
    name: Option<String>,
    injector: InjectorFn<'a, T>,
}

impl<'a, T> FieldDescriptor<'a, T>
where
    T: Clone + 'static,
{
    /// 创建新的字段描述符
    pub fn new<F>(injectable_type: TypeInfo, name: Option<&str>, injector: F) -> Self
    where
        F: FnOnce(T) + 'a,
    {
        Self {
            injectable_type,
            name: name.map(str::to_string),
            injector: Box::new(injector),
        }
    }

    /// 请求回调自身接受的类型
    pub fn of<F>(injector: F) -> Self
    where
        F: FnOnce(T) + 'a,
    {
        Self::new(TypeInfo::of::<T>(), None, injector)
    }

    /// 设置限定名称
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 装箱为可注入字段
    pub fn boxed(self) -> Box<dyn InjectableField + 'a> {
        Box::new(self)
    }
}

impl<'a, T> InjectableField for FieldDescriptor<'a, T>
where
    T: Clone + 'static,
{
    fn injectable_type(&self) -> TypeInfo {
        self.injectable_type
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn inject(self: Box<Self>, value: &(dyn Any + Send + Sync)) -> bool {
        match value.downcast_ref::<T>() {
            Some(value) => {
                (self.injector)(value.clone());
                true
            }
            None => false,
        }
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("injectable_type", &self.injectable_type)
            .field("name", &self.name)
            .field("injector", &"<function>")
            .finish()
    }
}

/// 构建一个字段描述符
pub fn describe_field<'a, T, F>(
    injectable_type: TypeInfo,
    name: Option<&str>,
    injector: F,
) -> Box<dyn InjectableField + 'a>
where
    T: Clone + 'static,
    F: FnOnce(T) + 'a,
{
    FieldDescriptor::new(injectable_type, name, injector).boxed()
}
