use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::models::users::entities::UserRole;
use crate::services::DepartmentService;
use crate::utils::SafeIDI64;

static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

pub async fn list_departments(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_departments(&req, query.into_inner())
        .await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(&req, department_data.into_inner())
        .await
}

pub async fn get_department(
    req: HttpRequest,
    department_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.get_department(&req, department_id.0).await
}

pub async fn update_department(
    req: HttpRequest,
    department_id: SafeIDI64,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(&req, department_id.0, update_data.into_inner())
        .await
}

pub async fn delete_department(
    req: HttpRequest,
    department_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .delete_department(&req, department_id.0)
        .await
}

// 配置路由
pub fn configure_departments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/departments")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()).for_writes())
            .wrap(middlewares::RateLimit)
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_departments))
            .route("", web::post().to(create_department))
            .route("/{id}", web::get().to(get_department))
            .route("/{id}", web::put().to(update_department))
            .route("/{id}", web::delete().to(delete_department)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::TestState;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_create_validate_and_update() {
        let state = TestState::new().await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.jwt_data())
                .configure(configure_departments_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/departments")
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"code": "not a code!", "name": "Science"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/departments")
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"code": "SCI", "name": "Science"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/departments/{id}"))
            .insert_header(state.bearer(1, "admin"))
            .set_json(json!({"name": "Natural Sciences"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/departments?search=natural")
            .insert_header(state.bearer(2, "student"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["name"], "Natural Sciences");
        assert_eq!(body["data"][0]["code"], "SCI");
    }
}
