//! # 组合层
//!
//! 组合根使用的入口，负责把配置源、日志和初始注册组合成一个可用的
//! [`Injector`](di_impl::Injector)。
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use stabby_composition::InjectorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let injector = InjectorBuilder::new()
//!         .add_config_env_vars("STABBY")
//!         .register("Life, the universe, and everything.".to_string())
//!         .register(42_i64)
//!         .build()?;
//!
//!     let answer: i64 = injector.resolve_typed(None)?;
//!     println!("答案: {}", answer);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config_sources;

// 重新导出主要类型
pub use builder::{InjectorBuilder, LoggingConfig};
pub use config_sources::{ConfigSourceType, ConfigSources};

// 重新导出错误类型
pub use stabby_common::InfrastructureError;
