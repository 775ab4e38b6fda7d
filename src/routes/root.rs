use actix_web::{HttpResponse, web};

pub const GREETING: &str = "Hello, welcome to the Classroom API!";

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING)
}

// 配置路由
pub fn configure_root_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
