//! 依赖注入器抽象接口

use crate::injectable::Injectable;
use stabby_common::DependencyResult;

/// 依赖注入器 trait
///
/// 接收注册并驱动 [`Injectable`] 的注入过程
pub trait DependencyInjector {
    /// 注册依赖
    fn register_dependency<T>(&mut self, instance: T, name: Option<&str>)
    where
        T: Send + Sync + 'static;

    /// 注入目标对象，遇到无法解析的依赖时立即停止并返回错误
    ///
    /// 已经交付的字段不会回滚。
    fn try_inject<I>(&self, target: &mut I) -> DependencyResult<()>
    where
        I: Injectable + ?Sized;

    /// 注入目标对象
    ///
    /// # Panics
    ///
    /// 任何依赖无法解析时 panic，缺失的装配属于启动期缺陷。
    fn inject<I>(&self, target: &mut I)
    where
        I: Injectable + ?Sized,
    {
        if let Err(e) = self.try_inject(target) {
            panic!("{}", e);
        }
    }
}
