//! Timesheet Server - 多租户工时记录后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite 存储，软删除，仓储函数
//! - **认证** (`auth`): JWT + Argon2，角色/归属范围判定
//! - **工时编码** (`entries`): 按工作地点类型校验并规整工时记录
//! - **服务** (`services`): 业务操作，每个操作一个连接或一个事务
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! timesheet-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、范围判定
//! ├── entries/       # 工时记录编码
//! ├── services/      # 业务操作
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod core;
pub mod db;
pub mod entries;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{Identity, JwtService};
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境：加载 `.env` 并初始化日志
///
/// 日志配置直接读取 `LOG_LEVEL` / `LOG_JSON` / `LOG_DIR`，
/// 以便在 [`Config::from_env`] 出错前就能输出日志。
pub fn setup_environment() -> Result<(), ServerError> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_json = std::env::var("LOG_JSON").ok().map(|v| v == "1" || v == "true");
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    init_logger_with_file(log_level.as_deref(), log_json, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  _______                     __              __
 /_  __(_)___ ___  ___  _____/ /_  ___  ___  / /_
  / / / / __ `__ \/ _ \/ ___/ __ \/ _ \/ _ \/ __/
 / / / / / / / / /  __(__  ) / / /  __/  __/ /_
/_/ /_/_/ /_/ /_/\___/____/_/ /_/\___/\___/\__/
    "#
    );
}
