use crate::auth::JwtConfig;
use crate::core::Result;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:timesheet.db | SQLite 数据库 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | JWT_SECRET | (debug 构建自动生成) | 至少 32 字符 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/timesheet.db HTTP_PORT=9000 cargo run -- serve
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 连接串
    pub database_url: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的项使用默认值；JWT 密钥不合法时报错
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:timesheet.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt: JwtConfig::from_env()?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        })
    }

    /// 测试用配置：内存数据库 + 固定密钥
    pub fn for_tests(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_port: 0,
            jwt: JwtConfig::new(jwt_secret),
            environment: "test".into(),
            log_level: "debug".into(),
            log_dir: None,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
