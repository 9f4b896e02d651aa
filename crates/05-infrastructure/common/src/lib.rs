//! # Stabby Common
//!
//! 这个 crate 提供了 Stabby 依赖注入容器的公共类型。
//!
//! ## 核心类型
//!
//! - [`TypeInfo`] - 依赖查找使用的类型标识
//! - [`DependencyError`] - 依赖解析错误
//! - [`InjectorConfig`] - 注入器配置

pub mod configuration;
pub mod errors;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use metadata::*;
