//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义依赖注册和注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`DependencyRegistry`] - 依赖注册表接口
//! - [`DependencyInjector`] - 依赖注入器接口
//! - [`Injectable`] - 可注入对象接口
//! - [`InjectableField`] - 可注入字段接口

pub mod container;
pub mod injectable;
pub mod record;
pub mod registry;

pub use container::*;
pub use injectable::*;
pub use record::*;
pub use registry::*;
