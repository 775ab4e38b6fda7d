use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use std::collections::HashMap;
use tracing::error;

use super::ClassService;
use crate::models::ListQuery;
use crate::services::{error_response, list_response};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    params: HashMap<String, String>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .list_classes_with_pagination(ListQuery::from_params(params))
        .await
    {
        Ok(response) => Ok(list_response(response)),
        Err(e) => {
            error!("GET /classes error: {}", e);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch classes",
            ))
        }
    }
}
