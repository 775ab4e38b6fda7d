/*!
 * 速率限制中间件
 *
 * 按角色分配固定窗口内的请求配额，计数保存在注入的 `RateLimiter` 中。
 * 必须放在 RequireJWT 之后，以便按用户计数；未认证请求按客户端 IP 计数并使用访客配额。
 *
 * ```rust,ignore
 * App::new()
 *     .app_data(web::Data::new(RateLimiter::from_config(&config.rate_limit)))
 *     .service(
 *         web::scope("/api/classes")
 *             .wrap(RateLimit)
 *             .wrap(RequireJWT)
 *     )
 * ```
 *
 * 超过配额返回 429 Too Many Requests，并带有 `Retry-After`。
 * 应用中没有注册 `RateLimiter` 时直接放行。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::RateLimitConfig;
use crate::middlewares::RequireJWT;
use crate::models::{ErrorResponse, users::entities::UserRole};

#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    count: u32,
    started: Instant,
}

/// 限流判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: u64 },
}

/// 固定窗口计数器
///
/// 键: user:{id} 或 ip:{addr}，值: 当前窗口的请求数与窗口起点
pub struct RateLimiter {
    cache: Cache<String, WindowCounter>,
    window: Duration,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn from_config(config: &RateLimitConfig) -> Self {
        let window = Duration::from_secs(config.window_secs.max(1));
        Self {
            cache: Cache::builder()
                .time_to_live(window)
                .max_capacity(100_000)
                .build(),
            window,
            config: config.clone(),
        }
    }

    /// 角色对应的配额，未认证请求使用访客配额
    pub fn quota_for(&self, role: Option<UserRole>) -> u32 {
        match role {
            Some(UserRole::Admin) => self.config.admin,
            Some(UserRole::Teacher) => self.config.teacher,
            Some(UserRole::Student) => self.config.student,
            None => self.config.guest,
        }
    }

    /// 记录一次请求并判定是否超限
    pub async fn check(&self, key: &str, quota: u32) -> RateLimitDecision {
        let window = self.window;
        let counter = self
            .cache
            .entry(key.to_string())
            .and_upsert_with(|entry| async move {
                match entry.map(|e| e.into_value()) {
                    Some(counter) if counter.started.elapsed() < window => WindowCounter {
                        count: counter.count.saturating_add(1),
                        started: counter.started,
                    },
                    _ => WindowCounter {
                        count: 1,
                        started: Instant::now(),
                    },
                }
            })
            .await
            .into_value();

        if counter.count > quota {
            let left = window.saturating_sub(counter.started.elapsed());
            RateLimitDecision::Limited {
                retry_after: left.as_secs().max(1),
            }
        } else {
            RateLimitDecision::Allowed {
                remaining: quota - counter.count,
            }
        }
    }
}

/// 从请求中提取客户端 IP
fn extract_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ErrorResponse::new("Too many requests, please try again later"))
}

#[derive(Clone)]
pub struct RateLimit;

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        Box::pin(async move {
            let Some(limiter) = req.app_data::<web::Data<RateLimiter>>().cloned() else {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            };

            // 构建限制键
            let role = RequireJWT::extract_user_role(req.request());
            let key = RequireJWT::extract_user_id(req.request())
                .map(|id| format!("user:{id}"))
                .unwrap_or_else(|| format!("ip:{}", extract_client_ip(&req)));
            let quota = limiter.quota_for(role);

            match limiter.check(&key, quota).await {
                RateLimitDecision::Allowed { .. } => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                RateLimitDecision::Limited { retry_after } => {
                    warn!("Rate limit exceeded for key: {} (quota: {})", key, quota);
                    Ok(req.into_response(
                        create_rate_limit_response(retry_after).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RateLimitConfig {
        RateLimitConfig {
            window_secs: 60,
            admin: 3,
            teacher: 2,
            student: 2,
            guest: 1,
        }
    }

    #[test]
    fn test_quota_per_role() {
        let limiter = RateLimiter::from_config(&config());
        assert_eq!(limiter.quota_for(Some(UserRole::Admin)), 3);
        assert_eq!(limiter.quota_for(Some(UserRole::Teacher)), 2);
        assert_eq!(limiter.quota_for(None), 1);
    }

    #[tokio::test]
    async fn test_fixed_window_counts_per_key() {
        let limiter = RateLimiter::from_config(&config());

        assert_eq!(
            limiter.check("user:1", 2).await,
            RateLimitDecision::Allowed { remaining: 1 }
        );
        assert_eq!(
            limiter.check("user:1", 2).await,
            RateLimitDecision::Allowed { remaining: 0 }
        );
        assert!(matches!(
            limiter.check("user:1", 2).await,
            RateLimitDecision::Limited { retry_after } if retry_after >= 1
        ));

        // 其他键互不影响
        assert_eq!(
            limiter.check("user:2", 2).await,
            RateLimitDecision::Allowed { remaining: 1 }
        );
    }

    async fn ping() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_middleware_returns_429() {
        use crate::utils::jwt::JwtUtils;
        use actix_web::{App, test};

        let jwt = JwtUtils::new("test-secret", 60);
        let token = jwt.generate_access_token(9, "student").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt))
                .app_data(web::Data::new(RateLimiter::from_config(&config())))
                .service(
                    web::scope("/api")
                        .wrap(RateLimit)
                        .wrap(RequireJWT)
                        .route("/ping", web::get().to(ping)),
                ),
        )
        .await;

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::get()
                .uri("/api/ping")
                .insert_header(("Authorization", format!("Bearer {token}")))
                .to_request();
            let res = test::call_service(&app, req).await;
            statuses.push(res.status());
        }

        assert_eq!(
            statuses,
            vec![StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]
        );
    }
}
