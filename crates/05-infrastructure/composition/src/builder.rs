//! 注入器构建器

use crate::config_sources::ConfigSources;
use di_abstractions::DependencyRecord;
use di_impl::Injector;
use stabby_common::{InfrastructureError, InjectorConfig, ResolutionPolicy};
use std::path::Path;
use tracing::info;

/// 注入器构建器
///
/// 组合根使用建造者模式装配配置、日志和初始注册
pub struct InjectorBuilder {
    /// 配置源列表
    config_sources: ConfigSources,
    /// 显式指定的配置，优先于配置源
    config: Option<InjectorConfig>,
    /// 显式指定的解析策略，最后生效
    resolution_policy: Option<ResolutionPolicy>,
    /// 按顺序执行的注册
    registrations: Vec<DependencyRecord>,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl InjectorBuilder {
    /// 创建新的注入器构建器
    pub fn new() -> Self {
        Self {
            config_sources: ConfigSources::new(),
            config: None,
            resolution_policy: None,
            registrations: Vec::new(),
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: LoggingConfig::default(),
        }
    }

    /// 添加 TOML 配置文件
    pub fn add_config_toml<P: AsRef<Path>>(mut self, path: P) -> Result<Self, InfrastructureError> {
        let path = path.as_ref();
        info!("添加 TOML 配置文件: {}", path.display());
        self.config_sources.add_toml(path)?;
        Ok(self)
    }

    /// 添加环境变量配置源
    pub fn add_config_env_vars<S: Into<String>>(mut self, prefix: S) -> Self {
        let prefix = prefix.into();
        info!("添加环境变量配置源，前缀: {}", prefix);
        self.config_sources.add_env_prefix(prefix);
        self
    }

    /// 直接指定注入器配置，跳过配置源
    pub fn with_config(mut self, config: InjectorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 指定同名依赖的解析策略
    pub fn with_resolution_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.resolution_policy = Some(policy);
        self
    }

    /// 注册未命名依赖
    pub fn register<T>(mut self, instance: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.registrations.push(DependencyRecord::new(instance, None));
        self
    }

    /// 注册命名依赖
    pub fn register_named<T>(mut self, instance: T, name: &str) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.registrations
            .push(DependencyRecord::new(instance, Some(name)));
        self
    }

    /// 配置日志
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = config;
        self.logging_enabled = true;
        self
    }

    /// 构建注入器
    pub fn build(self) -> Result<Injector, InfrastructureError> {
        // 只有在明确配置了日志时才初始化日志
        if self.logging_enabled {
            self.initialize_logging()?;
        }

        info!("开始构建注入器");

        let mut config = match self.config {
            Some(config) => config,
            None => self.config_sources.load()?,
        };
        if let Some(policy) = self.resolution_policy {
            config.resolution_policy = policy;
        }

        let mut injector = Injector::with_config(config);
        let registration_count = self.registrations.len();
        for record in self.registrations {
            injector.register_record(record);
        }

        info!("注入器构建完成，注册了 {} 个依赖", registration_count);
        Ok(injector)
    }

    /// 初始化日志系统
    fn initialize_logging(&self) -> Result<(), InfrastructureError> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(self.logging_config.level)
            .with_target(self.logging_config.show_target)
            .with_thread_ids(self.logging_config.show_thread_ids)
            .with_file(self.logging_config.show_file)
            .with_line_number(self.logging_config.show_line_number);

        if self.logging_config.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志初始化失败: {}", e),
        })?;

        info!("日志系统初始化完成");
        Ok(())
    }
}

impl Default for InjectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            show_target: true,
            show_thread_ids: true,
            show_file: true,
            show_line_number: true,
            json_format: false,
        }
    }

    /// 创建生产环境日志配置
    pub fn production() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: true,
        }
    }

    /// 设置日志级别
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }
}
