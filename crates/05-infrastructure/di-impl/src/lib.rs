//! # 依赖注入具体实现
//!
//! 提供内存依赖注册表 [`Registry`] 和依赖注入器 [`Injector`]

pub mod injector;
pub mod registry;

pub use injector::Injector;
pub use registry::Registry;

#[cfg(test)]
mod tests;
