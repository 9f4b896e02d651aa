//! 配置源管理
//!
//! 从 TOML 文件和环境变量加载 [`InjectorConfig`]，环境变量优先。

use config::{Config, Environment, File, FileFormat};
use stabby_common::{ConfigError, ConfigResult, InjectorConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置源类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSourceType {
    /// TOML 配置文件
    Toml(PathBuf),
    /// 带前缀的环境变量
    Environment(String),
}

/// 配置源集合
///
/// 按添加顺序合并，后添加的源覆盖先添加的源。
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    sources: Vec<ConfigSourceType>,
}

impl ConfigSources {
    /// 创建空的配置源集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加 TOML 配置文件
    pub fn add_toml<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("添加 TOML 配置源: {}", path.display());
        self.sources.push(ConfigSourceType::Toml(path.to_path_buf()));
        Ok(())
    }

    /// 添加环境变量配置源
    pub fn add_env_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        debug!("添加环境变量配置源，前缀: {}", prefix);
        self.sources.push(ConfigSourceType::Environment(prefix));
    }

    /// 已添加的配置源
    pub fn sources(&self) -> &[ConfigSourceType] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// 加载注入器配置
    pub fn load(&self) -> ConfigResult<InjectorConfig> {
        if self.sources.is_empty() {
            debug!("没有配置源，使用默认注入器配置");
            return Ok(InjectorConfig::default());
        }

        let mut builder = Config::builder();
        for source in &self.sources {
            builder = match source {
                ConfigSourceType::Toml(path) => builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                ),
                ConfigSourceType::Environment(prefix) => {
                    builder.add_source(Environment::with_prefix(prefix).try_parsing(true))
                }
            };
        }

        let config: InjectorConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;

        info!(
            "注入器配置加载完成: resolution_policy = {}, log_injections = {}",
            config.resolution_policy, config.log_injections
        );
        Ok(config)
    }
}
