use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值
            .set_default("app.system_name", "Classroom API")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 75)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.access_token_expiry", 60)?
            .set_default("database.url", "classroom.db")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cors.frontend_url", "")?
            .set_default("cors.max_age", 3600)?
            .set_default("rate_limit.window_secs", 60)?
            .set_default("rate_limit.admin", 20)?
            .set_default("rate_limit.teacher", 10)?
            .set_default("rate_limit.student", 10)?
            .set_default("rate_limit.guest", 5)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("CLASSROOM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cors.frontend_url", std::env::var("FRONTEND_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;

        Ok(app_config)
    }

    /// 校验必填项
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cors.frontend_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "FRONTEND_URL is not set (cors.frontend_url)".to_string(),
            ));
        }
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "JWT_SECRET is not set (jwt.secret)".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AppSettings, CorsConfig, DatabaseConfig, JwtConfig, LimitConfig, RateLimitConfig,
        ServerConfig, TimeoutConfig,
    };

    fn sample_config() -> AppConfig {
        AppConfig {
            app: AppSettings {
                system_name: "Classroom API".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                unix_socket_path: String::new(),
                workers: 2,
                max_workers: 4,
                timeouts: TimeoutConfig {
                    client_request: 5000,
                    client_disconnect: 1000,
                    keep_alive: 75,
                },
                limits: LimitConfig {
                    max_payload_size: 1024,
                },
            },
            jwt: JwtConfig {
                secret: "secret".to_string(),
                access_token_expiry: 60,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                pool_size: 1,
                timeout: 5,
            },
            cors: CorsConfig {
                frontend_url: "http://localhost:5173".to_string(),
                max_age: 3600,
            },
            rate_limit: RateLimitConfig {
                window_secs: 60,
                admin: 20,
                teacher: 10,
                student: 10,
                guest: 5,
            },
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_frontend_url() {
        let mut config = sample_config();
        config.cors.frontend_url = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("FRONTEND_URL"));
    }

    #[test]
    fn test_validate_requires_jwt_secret() {
        let mut config = sample_config();
        config.jwt.secret.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(sample_config().server_bind_address(), "127.0.0.1:8000");
        assert!(sample_config().is_development());
        assert!(!sample_config().is_production());
    }
}
