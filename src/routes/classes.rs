use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

// 配置路由：读取只需登录，写操作需要教师或管理员
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/classes")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()).for_writes())
            .wrap(middlewares::RateLimit)
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_classes))
            .route("", web::post().to(create_class))
            .route("/{id}", web::get().to(get_class))
            .route("/{id}", web::put().to(update_class))
            .route("/{id}", web::delete().to(delete_class)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::TestState;
    use crate::models::users::requests::CreateUserRequest;
    use crate::services::TOTAL_COUNT_HEADER;
    use crate::utils::json_error_handler;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    fn class_request(name: &str) -> CreateClassRequest {
        CreateClassRequest {
            name: name.to_string(),
            description: None,
            subject_id: None,
            teacher_id: None,
            capacity: None,
            status: None,
            banner_url: None,
            schedules: None,
        }
    }

    #[actix_web::test]
    async fn test_second_page_of_twenty_five() {
        let state = TestState::new().await;
        for i in 0..25 {
            state
                .storage
                .create_class(class_request(&format!("Class {i:02}")))
                .await
                .unwrap();
        }

        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .configure(configure_classes_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/classes?page=2&limit=10")
            .insert_header(state.bearer(1, "student"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(TOTAL_COUNT_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("25")
        );

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(10));
        assert_eq!(
            body["pagination"],
            json!({"page": 2, "limit": 10, "total": 25, "totalPages": 3})
        );
        // 按创建时间倒序，第二页从第 11 新的班级开始
        assert_eq!(body["data"][0]["name"], "Class 14");
    }

    #[actix_web::test]
    async fn test_client_invite_code_is_ignored() {
        let state = TestState::new().await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .configure(configure_classes_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/classes")
            .insert_header(state.bearer(1, "teacher"))
            .set_json(json!({"name": "Physics", "inviteCode": "HACKED"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        let id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(body, json!({"data": {"id": id}}));

        let req = test::TestRequest::get()
            .uri(&format!("/api/classes/{id}"))
            .insert_header(state.bearer(1, "teacher"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let code = body["data"]["inviteCode"].as_str().unwrap();
        assert_ne!(code, "HACKED");
        assert_eq!(code.len(), 7);
        assert_eq!(body["data"]["schedules"], json!([]));
        assert!(body["data"]["subject"].is_null());
    }

    #[actix_web::test]
    async fn test_schedules_and_relation_updates() {
        let state = TestState::new().await;
        let teacher = state
            .storage
            .create_user(CreateUserRequest {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                role: Some(UserRole::Teacher),
                image: None,
            })
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_classes_routes),
        )
        .await;

        // 课表必须是数组
        let req = test::TestRequest::post()
            .uri("/api/classes")
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"name": "Physics", "schedules": 5}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/classes")
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({
                "name": "Physics",
                "teacherId": teacher.id,
                "schedules": [{"day": "mon", "start": "09:00"}]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["data"]["id"].as_i64().unwrap();

        // 省略 teacherId 不会改动教师
        let req = test::TestRequest::put()
            .uri(&format!("/api/classes/{id}"))
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"capacity": 30}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["teacherId"], teacher.id);
        assert_eq!(body["data"]["schedules"][0]["day"], "mon");

        let req = test::TestRequest::put()
            .uri(&format!("/api/classes/{id}"))
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"teacherId": null}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["teacherId"].is_null());

        let req = test::TestRequest::get()
            .uri(&format!("/api/classes/{id}"))
            .insert_header(state.bearer(2, "student"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["teacher"].is_null());
        assert_eq!(body["data"]["capacity"], 30);
    }

    #[actix_web::test]
    async fn test_indexed_filter_over_http() {
        let state = TestState::new().await;
        for name in ["Biology 101", "Physics"] {
            state.storage.create_class(class_request(name)).await.unwrap();
        }
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .configure(configure_classes_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/classes?filters%5B0%5D%5Bfield%5D=name&filters%5B0%5D%5Boperator%5D=contains&filters%5B0%5D%5Bvalue%5D=Bio")
            .insert_header(state.bearer(1, "student"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["name"], "Biology 101");
    }

    #[actix_web::test]
    async fn test_access_rules() {
        let state = TestState::new().await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .configure(configure_classes_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/classes").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/classes")
            .insert_header(state.bearer(2, "student"))
            .set_json(json!({"name": "Chemistry"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/classes/abc")
            .insert_header(state.bearer(2, "student"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/classes/404")
            .insert_header(state.bearer(2, "student"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"error": "Class not found"}));
    }
}
