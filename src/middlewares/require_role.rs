/*!
 * 基于角色的访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用，只做放行或拒绝，不改写请求。
 *
 * ```rust,ignore
 * web::scope("/api/departments")
 *     .wrap(RequireRole::new_any(UserRole::admin_roles()).for_writes())
 *     .wrap(RequireJWT)
 * ```
 *
 * `for_writes()` 让 GET/HEAD/OPTIONS 直接放行，只校验写操作。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, StatusCode},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::{middlewares::RequireJWT, models::users::entities::UserRole};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    required_roles: Vec<UserRole>,
    writes_only: bool,
}

impl RequireRole {
    /// 创建需要任一角色的中间件
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            required_roles: roles.iter().map(|r| **r).collect(),
            writes_only: false,
        }
    }

    /// 只对写操作校验角色
    pub fn for_writes(mut self) -> Self {
        self.writes_only = true;
        self
    }
}

fn is_read_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
            writes_only: self.writes_only,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<UserRole>,
    writes_only: bool,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required_roles = self.required_roles.clone();
        let writes_only = self.writes_only;

        Box::pin(async move {
            if writes_only && is_read_method(req.method()) {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            }

            let Some(user_id) = RequireJWT::extract_user_id(req.request()) else {
                info!(
                    "Role check failed: No user claims found in request. Make sure RequireJWT middleware is applied first."
                );
                return Ok(req.into_response(
                    create_error_response(StatusCode::UNAUTHORIZED, "Authentication required")
                        .map_into_right_body(),
                ));
            };

            let user_role = RequireJWT::extract_user_role(req.request());
            let has_permission = user_role
                .as_ref()
                .is_some_and(|role| required_roles.contains(role));

            if has_permission {
                let res = srv.call(req).await?.map_into_left_body();
                Ok(res)
            } else {
                info!(
                    "Access denied for user {} (role: {:?}). Required roles: {:?}",
                    user_id, user_role, required_roles
                );
                Ok(req.into_response(
                    create_error_response(StatusCode::FORBIDDEN, "Access denied.")
                        .map_into_right_body(),
                ))
            }
        })
    }
}
