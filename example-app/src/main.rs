//! # 示例应用程序
//!
//! 演示如何使用 Stabby 注入器装配一个展示器

use anyhow::Context;
use clap::Parser;
use di_abstractions::{describe_field, DependencyInjector, Injectable, InjectableField};
use stabby_common::TypeInfo;
use stabby_composition::{InjectorBuilder, LoggingConfig};
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Stabby 示例应用")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/stabby.toml")]
    config: String,

    /// 环境变量前缀
    #[arg(long, default_value = "STABBY")]
    env_prefix: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 展示器
#[derive(Debug, Default)]
struct Presenter {
    title: Option<String>,
    answer: Option<i64>,
    greeting: Option<String>,
}

impl Injectable for Presenter {
    fn injectable_fields(&mut self) -> Vec<Box<dyn InjectableField + '_>> {
        let Self {
            title,
            answer,
            greeting,
        } = self;
        vec![
            describe_field(TypeInfo::of::<String>(), None, move |v: String| *title = Some(v)),
            describe_field(TypeInfo::of::<i64>(), None, move |v: i64| *answer = Some(v)),
            describe_field(TypeInfo::of::<String>(), Some("greeting"), move |v: String| {
                *greeting = Some(v)
            }),
        ]
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logging = LoggingConfig::default().with_level(parse_log_level(&args.log_level));
    let mut builder = InjectorBuilder::new().with_logging(logging);

    // 添加配置文件（如果存在）
    if std::path::Path::new(&args.config).exists() {
        builder = builder.add_config_toml(&args.config)?;
    } else {
        info!("配置文件不存在，将使用默认配置和环境变量");
    }

    let mut injector = builder
        .add_config_env_vars(&args.env_prefix)
        .register("Life, the universe, and everything.".to_string())
        .register(42_i64)
        .build()
        .context("构建注入器失败")?;

    injector.register_dependency("Hello".to_string(), Some("greeting"));

    let mut presenter = Presenter::default();
    injector.inject(&mut presenter);

    info!("标题: {:?}", presenter.title);
    info!("答案: {:?}", presenter.answer);
    info!("问候: {:?}", presenter.greeting);
    Ok(())
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
