//! # 产品管理微服务
//!
//! 基于 Axum 的单资源 CRUD 服务，产品数据保存在进程内存中，进程退出即丢失。
//! 采用模块化分层架构：
//! - 应用层 (app): 产品路由与处理器
//! - 核心层 (core): 统一错误处理、响应包装、中间件
//! - 基础设施层 (infrastructure): 日志
//! - 配置 (config): TOML 配置文件，默认端口 3000

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
