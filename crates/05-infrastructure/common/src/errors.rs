//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// 注册表中没有匹配的依赖记录
    #[error("依赖未找到: {type_name}{}", format_name(.name))]
    NotFound {
        type_name: String,
        name: Option<String>,
    },

    /// 注入过程中无法解析的依赖，属于启动期的装配缺陷
    #[error("Dependency not found in injection system: {type_name}{}", format_name(.name))]
    UnresolvedDependency {
        type_name: String,
        name: Option<String>,
    },
}

impl DependencyError {
    /// 创建未找到错误
    pub fn not_found(type_name: impl Into<String>, name: Option<&str>) -> Self {
        Self::NotFound {
            type_name: type_name.into(),
            name: name.map(str::to_string),
        }
    }

    /// 将查找失败提升为注入失败
    pub fn into_unresolved(self) -> Self {
        match self {
            Self::NotFound { type_name, name } => Self::UnresolvedDependency { type_name, name },
            other => other,
        }
    }

    /// 是否为查找失败
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn format_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" (名称: {})", name),
        None => String::new(),
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置值无效: {key} = {value}")]
    InvalidValue { key: String, value: String },
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
