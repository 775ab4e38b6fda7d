use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_users(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req, query.into_inner()).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(&req, user_data.into_inner()).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, user_id.0).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(&req, user_id.0, update_data.into_inner())
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&req, user_id.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()).for_writes())
            .wrap(middlewares::RateLimit)
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::TestState;
    use crate::utils::json_error_handler;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_admin_creates_and_filters_users() {
        let state = TestState::new().await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_user_routes),
        )
        .await;

        for (name, email, role) in [
            ("Ada Lovelace", "ada@example.com", "teacher"),
            ("Alan Turing", "alan@example.com", "student"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .insert_header(state.bearer(1, "admin"))
                .set_json(json!({"name": name, "email": email, "role": role}))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        // 重复邮箱
        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"name": "Someone", "email": "ada@example.com"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri("/api/users?role=teacher")
            .insert_header(state.bearer(2, "student"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["email"], "ada@example.com");
    }

    #[actix_web::test]
    async fn test_teacher_cannot_write_users() {
        let state = TestState::new().await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/users/1")
            .insert_header(state.bearer(3, "teacher"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let state = TestState::new().await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(state.bearer(1, "admin"))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert!(body["error"].is_string());
    }
}
