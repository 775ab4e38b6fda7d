use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::middlewares::RateLimiter;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

/// 服务器启动所需的共享状态
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub jwt: JwtUtils,
    pub rate_limiter: RateLimiter,
}

/// 准备服务器启动的上下文
/// 包括存储连接（含迁移）、令牌校验器和限流器
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let jwt = JwtUtils::from_config(&config.jwt);
    debug!(
        "Access tokens expire after {} minutes",
        config.jwt.access_token_expiry
    );

    let rate_limiter = RateLimiter::from_config(&config.rate_limit);
    debug!(
        "Rate limiter window: {}s (admin {}, teacher {}, student {}, guest {})",
        config.rate_limit.window_secs,
        config.rate_limit.admin,
        config.rate_limit.teacher,
        config.rate_limit.student,
        config.rate_limit.guest
    );

    Ok(StartupContext {
        storage,
        jwt,
        rate_limiter,
    })
}
