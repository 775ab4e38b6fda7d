use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::ErrorResponse;

/// 路径参数 `{id}` 的安全提取器
///
/// 无法解析为正整数时直接返回 400 `{ error }`，不会进入处理函数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(parse_id(raw).map(SafeIDI64).ok_or_else(|| {
            let response =
                HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid id: {raw}")));
            InternalError::from_response("invalid path id", response).into()
        }))
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
