//! 注入器配置

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 同名依赖的解析策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// 最早注册的同名依赖优先
    #[default]
    OldestFirst,
    /// 最近注册的同名依赖优先
    NewestFirst,
}

impl FromStr for ResolutionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oldest_first" | "oldest-first" => Ok(Self::OldestFirst),
            "newest_first" | "newest-first" => Ok(Self::NewestFirst),
            other => Err(ConfigError::InvalidValue {
                key: "resolution_policy".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OldestFirst => f.write_str("oldest_first"),
            Self::NewestFirst => f.write_str("newest_first"),
        }
    }
}

/// 注入器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// 同名依赖的解析策略
    pub resolution_policy: ResolutionPolicy,
    /// 是否记录每个字段的解析过程
    pub log_injections: bool,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            resolution_policy: ResolutionPolicy::OldestFirst,
            log_injections: true,
        }
    }
}

impl InjectorConfig {
    /// 设置解析策略
    pub fn with_resolution_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.resolution_policy = policy;
        self
    }

    /// 设置是否记录字段解析
    pub fn with_log_injections(mut self, enabled: bool) -> Self {
        self.log_injections = enabled;
        self
    }
}
